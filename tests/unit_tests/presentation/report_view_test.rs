use axum::http::StatusCode;
use chrono::Utc;

use speakwell::domain::{
    AnalysisReport, AudioFormat, AudioMetrics, FeedbackResult, MetricsOutcome, Rubric,
    StoragePath, StudentProfile, Transcript, UploadId,
};
use speakwell::presentation::views::{
    escape_html, render_error_page, render_report, render_upload_form,
};

fn report(outcome: MetricsOutcome, transcript: &str) -> AnalysisReport {
    AnalysisReport {
        upload_path: StoragePath::new(&UploadId::new(), AudioFormat::Wav),
        original_filename: "my <story>.wav".to_string(),
        student: StudentProfile {
            name: Some("Mei".to_string()),
            age: Some("9".to_string()),
            notes: None,
        },
        metrics: AudioMetrics {
            duration_s: 12.5,
            silence_ratio: 0.1234,
            num_silence_segments: 3,
            approx_peak_rate: 1.5,
        },
        metrics_outcome: outcome,
        transcript: Transcript::new(transcript),
        feedback: FeedbackResult {
            english_text: "Great effort!".to_string(),
            chinese_text: "表現很棒！".to_string(),
            rubric: Rubric::clamped(4, 3, 3),
        },
        analyzed_at: Utc::now(),
    }
}

#[test]
fn given_measured_report_when_rendering_then_metrics_rubric_and_link_appear() {
    let report = report(MetricsOutcome::Measured, "once upon a time");

    let html = render_report(&report);

    assert!(html.contains(r#"<td id="duration_s">12.50</td>"#));
    assert!(html.contains(r#"<td id="silence_ratio">0.123</td>"#));
    assert!(html.contains(r#"<td id="num_silence_segments">3</td>"#));
    assert!(html.contains(r#"<td id="approx_peak_rate">1.50</td>"#));
    assert!(html.contains(r#"<td id="pronunciation">4</td>"#));
    assert!(html.contains(r#"<td id="fluency">3</td>"#));
    assert!(html.contains(r#"<td id="intonation">3</td>"#));
    assert!(html.contains("表現很棒！"));
    assert!(html.contains("once upon a time"));
    assert!(html.contains(&format!("/uploads/{}", report.upload_path.as_str())));
    assert!(html.contains("Mei"));
}

#[test]
fn given_unavailable_metrics_when_rendering_then_error_block_replaces_table() {
    let report = report(
        MetricsOutcome::Unavailable {
            reason: "audio decoding failed: no suitable format reader".to_string(),
        },
        "",
    );

    let html = render_report(&report);

    assert!(html.contains("Analysis failed"));
    assert!(html.contains("audio decoding failed: no suitable format reader"));
    assert!(!html.contains(r#"id="silence_ratio""#));
    assert!(html.contains(r#"<td id="pronunciation">4</td>"#));
    assert!(!html.contains("Transcript / 逐字稿"));
}

#[test]
fn given_markup_in_user_text_when_rendering_then_it_is_escaped() {
    let report = report(MetricsOutcome::Measured, "<script>alert(1)</script>");

    let html = render_report(&report);

    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;script&gt;"));
    assert!(html.contains("my &lt;story&gt;.wav"));
}

#[test]
fn given_special_characters_when_escaping_then_all_are_replaced() {
    assert_eq!(
        escape_html(r#"<a href="x">Tom & Jerry's</a>"#),
        "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
    );
}

#[test]
fn given_upload_limit_when_rendering_form_then_fields_and_limit_are_shown() {
    let html = render_upload_form(50);

    assert!(html.contains(r#"action="/upload""#));
    assert!(html.contains(r#"name="file""#));
    assert!(html.contains(r#"name="student_name""#));
    assert!(html.contains("50"));
}

#[test]
fn given_error_when_rendering_error_page_then_status_and_escaped_message_appear() {
    let html = render_error_page(StatusCode::UNSUPPORTED_MEDIA_TYPE, "bad <file>.exe");

    assert!(html.contains("415"));
    assert!(html.contains("bad &lt;file&gt;.exe"));
}
