use std::time::Duration;

/// Format a track length for the secondary label of the track and queue panes.
///
/// `M:SS` below one hour, `H:MM:SS` above. Partial seconds round up so a
/// 2.4s clip never shows as `0:02`. Unknown durations render as `--:--`.
pub fn format_duration(d: Option<Duration>) -> String {
    let Some(d) = d else {
        return "--:--".to_string();
    };

    let mut total_secs = d.as_secs();
    if d.subsec_nanos() > 0 {
        total_secs = total_secs.saturating_add(1);
    }

    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = total_secs % 60;
    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, seconds)
    } else {
        format!("{}:{:02}", minutes, seconds)
    }
}

/// Format elapsed playback time as `MM:SS` for the status line.
pub fn format_mmss(d: Duration) -> String {
    let secs = d.as_secs();
    format!("{:02}:{:02}", secs / 60, secs % 60)
}
