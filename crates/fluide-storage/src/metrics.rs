//! Album storage metrics.
//!
//! Counters are recorded through the `metrics` facade; they are no-ops until
//! the binary installs a recorder.

use metrics::counter;

/// Metric name constants for consistency.
pub mod names {
    /// Album creations by status.
    pub const ALBUMS_CREATED_TOTAL: &str = "fluide_albums_created_total";

    /// File uploads by status.
    pub const UPLOADS_TOTAL: &str = "fluide_uploads_total";

    /// Bucket listings that failed and were reported as empty.
    pub const LIST_FAILURES_TOTAL: &str = "fluide_list_failures_total";
}

fn status_label(success: bool) -> &'static str {
    if success {
        "success"
    } else {
        "failure"
    }
}

/// Record the outcome of an album creation.
pub fn record_album_created(success: bool) {
    counter!(names::ALBUMS_CREATED_TOTAL, "status" => status_label(success)).increment(1);
}

/// Record the outcome of one file upload.
pub fn record_upload(success: bool) {
    counter!(names::UPLOADS_TOTAL, "status" => status_label(success)).increment(1);
}

/// Record a failed bucket listing.
pub fn record_list_failure() {
    counter!(names::LIST_FAILURES_TOTAL).increment(1);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metric_names() {
        assert!(names::ALBUMS_CREATED_TOTAL.starts_with("fluide_"));
        assert!(names::UPLOADS_TOTAL.contains("uploads"));
        assert_eq!(status_label(true), "success");
        assert_eq!(status_label(false), "failure");
    }
}
