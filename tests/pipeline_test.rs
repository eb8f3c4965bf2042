//! End-to-end tests for the analysis pipeline over on-disk corpora.

use std::io::Write;

use chastota::error::ChastotaError;
use chastota::frequency::vocabulary_reduction;
use chastota::pipeline::{AnalysisConfig, AnalysisPipeline};
use chastota::report::Report;
use tempfile::NamedTempFile;

fn corpus(text: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(text.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

fn pipeline(config: AnalysisConfig) -> AnalysisPipeline {
    AnalysisPipeline::new(config.with_thread_pool_size(2)).unwrap()
}

#[test]
fn test_cleaning_keeps_only_russian_words() {
    let file = corpus("Привет, мир! 123 Hello\n");

    let analysis = pipeline(AnalysisConfig::default()).run(file.path()).unwrap();

    assert_eq!(analysis.total_words, 2);
    let mut words: Vec<&str> = analysis
        .original
        .top
        .iter()
        .map(|e| e.word.as_str())
        .collect();
    words.sort();
    assert_eq!(words, ["мир", "привет"]);
}

#[test]
fn test_full_run() {
    let file = corpus(
        "Старый рыбак сидел на берегу.\r\n\
         Рыбак смотрел на реку, а река текла.\r\n\
         \r\n\
         Рыбаки любят реку!\r\n",
    );

    let analysis = pipeline(AnalysisConfig::default()).run(file.path()).unwrap();

    // старый рыбак сидел берегу рыбак смотрел реку река текла рыбаки любят реку
    assert_eq!(analysis.lines, 4);
    assert_eq!(analysis.total_words, 12);
    assert_eq!(analysis.original.unique_words, 10);

    let top = &analysis.original.top;
    assert_eq!(top[0].word, "реку");
    assert_eq!(top[0].count, 2);
    assert_eq!(top[1].word, "рыбак");
    assert!((top[0].percentage - 2.0 / 12.0 * 100.0).abs() < 1e-9);

    for pair in top.windows(2) {
        assert!(pair[0].count >= pair[1].count);
    }
    let ranks: Vec<usize> = top.iter().map(|e| e.rank).collect();
    assert_eq!(ranks, (1..=top.len()).collect::<Vec<_>>());

    assert_eq!(analysis.original.rarest.singletons, 8);
    let rare: Vec<&str> = analysis
        .original
        .rarest
        .entries
        .iter()
        .map(|e| e.word.as_str())
        .collect();
    let mut sorted = rare.clone();
    sorted.sort();
    assert_eq!(rare, sorted);

    assert!(analysis.stemmed.unique_words <= analysis.original.unique_words);
    assert_eq!(
        analysis.vocabulary_reduction,
        vocabulary_reduction(analysis.original.unique_words, analysis.stemmed.unique_words)
    );
    let stemmed_total: u64 = analysis.stemmed.top.iter().map(|e| e.count).sum();
    assert!(stemmed_total <= analysis.total_words);
}

#[test]
fn test_limit_caps_rankings() {
    let text: String = (0..30)
        .map(|i| format!("слово{} ", "а".repeat(i + 1)))
        .collect();
    let file = corpus(&text);

    let analysis = pipeline(AnalysisConfig::default().with_limit(5))
        .run(file.path())
        .unwrap();

    assert_eq!(analysis.limit, 5);
    assert_eq!(analysis.original.top.len(), 5);
    assert_eq!(analysis.original.rarest.entries.len(), 5);
    assert_eq!(analysis.original.rarest.singletons, 30);

    let report = analysis.to_report().to_string();
    assert!(report.contains("3. TOP-5 MOST COMMON WORDS"));
}

#[test]
fn test_empty_file() {
    let file = corpus("");

    let err = pipeline(AnalysisConfig::default())
        .run(file.path())
        .unwrap_err();

    assert!(matches!(err, ChastotaError::EmptyCorpus));

    let text = Report::empty_corpus(Some(file.path())).to_string();
    assert!(text.contains("Total words after cleaning: 0"));
    assert!(text.contains("No words found after cleaning!"));
}

#[test]
fn test_only_stop_words_and_noise() {
    let file = corpus("и в на не что\n42 hello, world!\n--- ...\n");

    let err = pipeline(AnalysisConfig::default())
        .run(file.path())
        .unwrap_err();

    assert!(matches!(err, ChastotaError::EmptyCorpus));
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dataset.txt");

    let err = pipeline(AnalysisConfig::default()).run(&path).unwrap_err();

    assert!(matches!(err, ChastotaError::InputNotFound(_)));
    assert_eq!(err.to_string(), format!("File {} not found!", path.display()));
}

#[test]
fn test_extra_stop_words() {
    let stopwords = corpus("# project-specific\nрыбак\n\nРЕКА\n");
    let file = corpus("рыбак река лодка рыбак\n");

    let analysis = pipeline(AnalysisConfig::default().with_stopwords_file(stopwords.path()))
        .run(file.path())
        .unwrap();

    assert_eq!(analysis.total_words, 1);
    assert_eq!(analysis.original.top[0].word, "лодка");
}

#[test]
fn test_missing_stop_words_file() {
    let result = AnalysisPipeline::new(
        AnalysisConfig::default().with_stopwords_file("/definitely/not/here/stop.txt"),
    );

    assert!(matches!(result, Err(ChastotaError::Io(_))));
}

#[test]
fn test_report_sections_in_order() {
    let file = corpus("Кошка спала на окне.\nКошки спали, а собака лаяла.\n");

    let analysis = pipeline(AnalysisConfig::default()).run(file.path()).unwrap();
    let text = analysis.to_report().to_string();

    let headings = [
        "1. TEXT CLEANING",
        "2. WORDCOUNT DEVELOPMENT",
        "3. TOP-50 MOST COMMON WORDS",
        "3. TOP-50 LEAST COMMON WORDS",
        "4. STEMMING APPLICATION",
        "5. TOP-50 MOST COMMON WORDS AFTER STEMMING",
        "5. TOP-50 LEAST COMMON WORDS AFTER STEMMING",
        "ANALYSIS SUMMARY",
        "Analysis completed successfully!",
    ];
    let positions: Vec<usize> = headings
        .iter()
        .map(|h| text.find(h).unwrap_or_else(|| panic!("missing {h}")))
        .collect();
    for pair in positions.windows(2) {
        assert!(pair[0] < pair[1]);
    }

    // спала/спали share the stem "спа"
    assert!(text.contains("Unique words: 7"));
    assert!(text.contains("Unique words after stemming: 6"));
}
