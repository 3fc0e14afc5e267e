use std::time::Duration;

/// Wrapper type to parse durations with optional suffixes (e.g. 500ms, 2s, 1.5m).
///
/// A bare number is read as seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DurationArg(pub Duration);

impl std::str::FromStr for DurationArg {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().replace('_', "");
        let lower = s.to_ascii_lowercase();
        let (num_str, unit_secs) = parse_with_suffix(&lower);
        let num: f64 = num_str
            .parse()
            .map_err(|_| format!("Invalid duration number: {num_str}"))?;
        if !num.is_finite() || num <= 0.0 {
            return Err(format!("Duration must be positive: {s}"));
        }
        Duration::try_from_secs_f64(num * unit_secs)
            .map(Self)
            .map_err(|e| format!("Duration out of range: {e}"))
    }
}

fn parse_with_suffix(s: &str) -> (&str, f64) {
    const SUFFIXES: &[(&[&str], f64)] = &[
        (&["ms"], 0.001),
        (&["min", "m"], 60.0),
        (&["h"], 3600.0),
        (&["sec", "s"], 1.0),
    ];
    for (suffixes, unit) in SUFFIXES {
        for suffix in *suffixes {
            if let Some(stripped) = s.strip_suffix(suffix) {
                return (stripped.trim(), *unit);
            }
        }
    }
    (s, 1.0)
}
