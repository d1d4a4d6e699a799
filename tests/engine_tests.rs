//! Integration tests for the jobfit engine

use jobfit::config::EngineConfig;
use jobfit::error::JobFitError;
use jobfit::input::jobs::{load_job_json, load_jobs_json};
use jobfit::input::{JobPosting, ResumeProfile};
use jobfit::processing::analyzer::AnalysisEngine;
use jobfit::processing::bias::BiasLevel;
use jobfit::processing::keywords::KeywordTier;
use std::path::Path;

fn engine() -> AnalysisEngine {
    AnalysisEngine::new(&EngineConfig::default()).unwrap()
}

fn fixture_resume() -> ResumeProfile {
    ResumeProfile::from_json_file(Path::new("tests/fixtures/sample_resume.json")).unwrap()
}

fn fixture_jobs() -> Vec<JobPosting> {
    load_jobs_json(Path::new("tests/fixtures/sample_jobs.json")).unwrap()
}

#[test]
fn test_fixture_loading_ignores_unknown_fields() {
    let jobs = fixture_jobs();
    assert_eq!(jobs.len(), 3);
    assert_eq!(jobs[0].title, "IT Support Specialist");
    assert_eq!(jobs[0].salary_min, Some(55000.0));

    let resume = fixture_resume();
    assert!(!resume.is_empty());
    assert_eq!(resume.sections.education, "BS Information Systems");
}

#[test]
fn test_end_to_end_ranking() {
    let results = engine().rank_jobs(&fixture_resume(), &fixture_jobs(), 10).unwrap();

    assert_eq!(results.len(), 3);
    assert_eq!(results[0].job.title, "IT Support Specialist");
    assert_eq!(
        results.iter().map(|r| r.rank).collect::<Vec<_>>(),
        vec![1, 2, 3]
    );
    for result in &results {
        assert!((0.0..=1.0).contains(&result.score));
        assert!((0.0..=100.0).contains(&result.percentage));
        assert!(result.key_factors.len() <= 5);
    }
    // The support posting should surface concrete shared skills.
    assert!(results[0]
        .key_factors
        .iter()
        .any(|f| f.contains("active directory")));
}

#[test]
fn test_ranking_is_deterministic() {
    let engine = engine();
    let resume = fixture_resume();
    let jobs = fixture_jobs();

    let first = engine.rank_jobs(&resume, &jobs, 10).unwrap();
    let second = engine.rank_jobs(&resume, &jobs, 10).unwrap();

    let first_json = serde_json::to_string(&first).unwrap();
    let second_json = serde_json::to_string(&second).unwrap();
    assert_eq!(first_json, second_json);
}

#[test]
fn test_enhancement_never_lowers_ranking_scores() {
    // Scores out of rank_jobs are enhanced; none may fall below the raw
    // cosine similarity, and all must stay bounded.
    use jobfit::processing::features::JobFeatureExtractor;
    use jobfit::processing::normalizer::TextNormalizer;
    use jobfit::processing::similarity::SimilarityEngine;

    let resume = fixture_resume();
    let jobs = fixture_jobs();

    let normalizer = TextNormalizer::new();
    let extractor = JobFeatureExtractor::new();
    let resume_text = normalizer.normalize(&resume.full_text);
    let blobs: Vec<String> = jobs.iter().map(|job| extractor.extract(job)).collect();
    let base = SimilarityEngine::new()
        .score_jobs(&resume_text, &blobs)
        .unwrap();

    let results = engine().rank_jobs(&resume, &jobs, 10).unwrap();
    for result in results {
        let index = jobs
            .iter()
            .position(|job| job.title == result.job.title)
            .unwrap();
        assert!(result.score >= base[index]);
        assert!(result.score <= 1.0);
    }
}

#[test]
fn test_ats_scenario_windows_active_directory() {
    let resume = ResumeProfile::from_text("windows 10 active directory help desk troubleshooting");
    let job = JobPosting {
        title: "IT Support".to_string(),
        description: "Seeking IT Support: windows, active directory, office 365 required"
            .to_string(),
        ..JobPosting::default()
    };

    let report = engine().analyze_job(&resume, &job).unwrap();

    let critical_matched: Vec<(&str, f64)> = report
        .ats
        .critical_matches
        .iter()
        .map(|k| (k.keyword.as_str(), k.weight))
        .collect();
    assert!(critical_matched.contains(&("windows", 10.0)));
    assert!(critical_matched.contains(&("active directory", 15.0)));

    assert!(report
        .ats
        .critical_misses
        .iter()
        .any(|k| k.keyword == "office 365"));

    assert!(report.ats.score_percentage > 0.0);
    assert!(report.ats.score_percentage < 100.0);

    // The miss also shows up as a missing keyword with critical advice.
    let missing = report
        .missing_keywords
        .iter()
        .find(|m| m.keyword == "office 365")
        .unwrap();
    assert_eq!(missing.tier, KeywordTier::Critical);
}

#[test]
fn test_bias_scenario_rockstar_posting() {
    let resume = fixture_resume();
    let job = load_job_json(Path::new("tests/fixtures/biased_job.json")).unwrap();

    let report = engine().analyze_job(&resume, &job).unwrap();

    let categories: std::collections::BTreeSet<String> = report
        .bias
        .bias_flags
        .iter()
        .map(|f| f.category.to_string())
        .collect();
    assert!(categories.len() >= 3);
    assert!(categories.contains("age"));
    assert!(categories.contains("gender"));
    assert!(categories.contains("cultural"));

    assert!(report.bias.bias_score > 25);
    assert!(matches!(
        report.bias.bias_level,
        BiasLevel::Poor | BiasLevel::VeryPoor
    ));

    // Red-flag culture phrases are counted too.
    assert!(!report.bias.red_flags.is_empty());
    // And the recommendations call out the flag count.
    assert!(report
        .recommendations
        .iter()
        .any(|line| line.contains("potentially biased")));
}

#[test]
fn test_empty_resume_is_terminal_everywhere() {
    let engine = engine();
    let empty = ResumeProfile::from_text("   \n ");

    let ranked = engine.rank_jobs(&empty, &fixture_jobs(), 5);
    assert!(matches!(ranked, Err(JobFitError::Validation(_))));

    let analyzed = engine.analyze_job(&empty, &fixture_jobs()[0]);
    assert!(matches!(analyzed, Err(JobFitError::Validation(_))));
}

#[test]
fn test_job_without_table_keywords_scores_zero_percent() {
    let resume = fixture_resume();
    let job = JobPosting {
        title: "Line Cook".to_string(),
        description: "Prepare dishes, plate desserts, clean the station".to_string(),
        ..JobPosting::default()
    };

    let report = engine().analyze_job(&resume, &job).unwrap();
    assert_eq!(report.ats.possible_points, 0.0);
    assert_eq!(report.ats.score_percentage, 0.0);
    assert!(report.missing_keywords.is_empty());
}

#[test]
fn test_missing_keywords_capped_at_ten() {
    let resume = ResumeProfile::from_text("unrelated retail cashier background");
    let job = JobPosting {
        title: "Systems Administrator".to_string(),
        description: "windows, windows server, active directory, office 365, azure, \
                      intune, sccm, powershell, servicenow, itil, dns, dhcp, vpn, \
                      networking, group policy, exchange, linux, macos required; \
                      customer service, documentation, escalation, ticketing"
            .to_string(),
        ..JobPosting::default()
    };

    let report = engine().analyze_job(&resume, &job).unwrap();
    assert_eq!(report.missing_keywords.len(), 10);

    // Sorted by importance, so the heaviest keyword leads.
    assert_eq!(report.missing_keywords[0].keyword, "active directory");
    let importances: Vec<f64> = report.missing_keywords.iter().map(|m| m.importance).collect();
    let mut sorted = importances.clone();
    sorted.sort_by(|a, b| b.partial_cmp(a).unwrap());
    assert_eq!(importances, sorted);
}

#[test]
fn test_custom_config_round_trip_drives_engine() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("jobfit.toml");
    EngineConfig::default().save(&path).unwrap();

    let config = EngineConfig::load(Some(&path)).unwrap();
    let engine = AnalysisEngine::new(&config).unwrap();

    let results = engine.rank_jobs(&fixture_resume(), &fixture_jobs(), 2).unwrap();
    assert_eq!(results.len(), 2);
}
