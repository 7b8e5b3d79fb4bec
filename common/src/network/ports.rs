use std::collections::BTreeSet;

use crate::error::EnumerationError;

/// Parses a port specification such as `"22,80,443"` or `"22,8000-8100"`.
///
/// Returns ascending, de-duplicated ports in `1..=65535`. Reversed range
/// bounds are swapped; empty tokens are skipped.
pub fn parse_port_spec(spec: &str) -> Result<Vec<u16>, EnumerationError> {
    let mut ports: BTreeSet<u16> = BTreeSet::new();

    for token in spec.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        match token.split_once('-') {
            Some((start, end)) => {
                let start: u16 = parse_port(spec, start.trim())?;
                let end: u16 = parse_port(spec, end.trim())?;
                let (low, high) = if start <= end { (start, end) } else { (end, start) };
                ports.extend(low..=high);
            }
            None => {
                ports.insert(parse_port(spec, token)?);
            }
        }
    }

    if ports.is_empty() {
        return Err(EnumerationError::port_spec(spec, "no ports given"));
    }
    Ok(ports.into_iter().collect())
}

fn parse_port(spec: &str, token: &str) -> Result<u16, EnumerationError> {
    let value: u32 = token
        .parse::<u32>()
        .map_err(|_| EnumerationError::port_spec(spec, format!("'{token}' is not a number")))?;

    match u16::try_from(value) {
        Ok(port) if port >= 1 => Ok(port),
        _ => Err(EnumerationError::port_spec(
            spec,
            format!("{value} is outside 1-65535"),
        )),
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
