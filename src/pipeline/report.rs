use serde::{Deserialize, Serialize};

/// Outcome of one snapshot run, printed as the closing summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    pub playlist_title: String,
    pub total_plays: usize,
    pub extracted_queries: usize,
    pub resolved: usize,
    pub unresolved_titles: Vec<String>,
    pub playlist_uri: Option<String>,
}

impl RunReport {
    pub fn new(playlist_title: String, total_plays: usize, extracted_queries: usize) -> Self {
        Self {
            playlist_title,
            total_plays,
            extracted_queries,
            resolved: 0,
            unresolved_titles: Vec::new(),
            playlist_uri: None,
        }
    }

    pub fn record_resolved(&mut self) {
        self.resolved += 1;
    }

    pub fn record_unresolved(&mut self, title: String) {
        self.unresolved_titles.push(title);
    }

    pub fn unresolved(&self) -> usize {
        self.unresolved_titles.len()
    }

    pub fn resolution_rate(&self) -> f64 {
        if self.extracted_queries == 0 {
            return 0.0;
        }
        (self.resolved as f64 / self.extracted_queries as f64) * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_track_outcomes() {
        let mut report = RunReport::new("KEXP - 2020-01-01 12:00".to_string(), 5, 3);

        report.record_resolved();
        report.record_resolved();
        report.record_unresolved("Obscure B-Side".to_string());

        assert_eq!(report.resolved, 2);
        assert_eq!(report.unresolved(), 1);
        assert_eq!(report.unresolved_titles, vec!["Obscure B-Side"]);
    }

    #[test]
    fn test_resolution_rate() {
        let mut report = RunReport::new("title".to_string(), 4, 4);
        report.record_resolved();
        report.record_resolved();
        report.record_resolved();

        assert!((report.resolution_rate() - 75.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_resolution_rate_empty_run() {
        let report = RunReport::new("title".to_string(), 0, 0);
        assert_eq!(report.resolution_rate(), 0.0);
    }
}
