//! Date parsing for link event dates

use crate::error::Result;
use chrono::NaiveDate;

/// Parse an event date
///
/// Accepts US `month/day/year` dates (`1/6/2014`, `01/06/2014`) and ISO
/// `2014-01-06`.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use linkedwith_domain::date::parse_date;
///
/// assert_eq!(parse_date("2/27/2014").unwrap(), NaiveDate::from_ymd_opt(2014, 2, 27).unwrap());
/// assert_eq!(parse_date("2014-02-27").unwrap(), NaiveDate::from_ymd_opt(2014, 2, 27).unwrap());
/// assert!(parse_date("27.02.2014").is_err());
/// ```
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    let s = s.trim();
    if s.contains('-') {
        return Ok(NaiveDate::parse_from_str(s, "%Y-%m-%d")?);
    }
    Ok(NaiveDate::parse_from_str(s, "%m/%d/%Y")?)
}
