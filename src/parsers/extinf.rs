use anyhow::{Result, bail};
use lazy_static::lazy_static;
use regex::Regex;

use crate::{constants, error::M3uError, model::extinf::ExtInf};

lazy_static! {
    // the duration ends at the first comma, the title may contain more of them
    static ref EXTINF_RE: Regex = Regex::new(r"^#EXTINF:(?P<duration>[^,]*)(?:,(?P<title>.*))?$")
        .expect("valid EXTINF regex");
}

/// Parses `#EXTINF:<duration>,<title>`.
/// Only a line without the `#EXTINF:` prefix is an error, a bad duration just means
/// the duration is unknown.
pub fn parse(line: &str) -> Result<ExtInf> {
    let Some(captures) = EXTINF_RE.captures(line) else {
        bail!(M3uError::Syntax(format!(
            "`{}` is not an {} directive",
            line,
            constants::EXTINF_PREFIX
        )));
    };
    let duration_field = captures.name("duration").map_or("", |m| m.as_str());
    let duration = parse_duration(duration_field);
    if duration.is_none() && !is_unknown_duration(duration_field) {
        log::warn!("invalid duration in `{}`, treating it as unknown", line);
    }
    let title = captures
        .name("title")
        .map(|m| m.as_str().trim().to_string())
        .filter(|title| !title.is_empty());

    Ok(ExtInf { duration, title })
}

/// Some writers put attributes after the duration (`-1 tvg-id="x"`),
/// only the first token counts.
fn parse_duration(field: &str) -> Option<u64> {
    let token = field.split_whitespace().next()?;
    if let Ok(secs) = token.parse::<i64>() {
        return u64::try_from(secs).ok();
    }
    let secs = token.parse::<f64>().ok()?;

    (secs.is_finite() && secs >= 0.0).then(|| secs.round() as u64)
}

fn is_unknown_duration(field: &str) -> bool {
    field
        .split_whitespace()
        .next()
        .is_none_or(|token| token.parse::<i64>().is_ok_and(|secs| secs < 0))
}
