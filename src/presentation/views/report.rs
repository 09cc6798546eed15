use crate::domain::{AnalysisReport, MetricsOutcome};

use super::layout::{escape_html, page};

pub fn render_report(report: &AnalysisReport) -> String {
    let file_name = report.upload_path.as_str();

    let mut body = format!(
        r#"<h1>Feedback report / 回饋報告</h1>
<p>Recording: <a href="/uploads/{file_name}">{original}</a></p>
"#,
        file_name = escape_html(file_name),
        original = escape_html(&report.original_filename),
    );

    if let Some(name) = &report.student.name {
        body.push_str(&format!("<p>Student / 學生: {}</p>\n", escape_html(name)));
    }
    if let Some(age) = &report.student.age {
        body.push_str(&format!("<p>Age / 年齡: {}</p>\n", escape_html(age)));
    }

    body.push_str("<h2>Audio metrics / 音訊指標</h2>\n");
    match &report.metrics_outcome {
        MetricsOutcome::Measured => {
            let m = &report.metrics;
            body.push_str(&format!(
                r#"<table>
    <tr><th>Duration (s)</th><td id="duration_s">{:.2}</td></tr>
    <tr><th>Silence ratio</th><td id="silence_ratio">{:.3}</td></tr>
    <tr><th>Silence segments</th><td id="num_silence_segments">{}</td></tr>
    <tr><th>Peak rate (/s)</th><td id="approx_peak_rate">{:.2}</td></tr>
</table>
"#,
                m.duration_s, m.silence_ratio, m.num_silence_segments, m.approx_peak_rate,
            ));
        }
        MetricsOutcome::Unavailable { reason } => {
            body.push_str(&format!(
                "<div class=\"error\">Analysis failed / 分析失敗: {}</div>\n",
                escape_html(reason)
            ));
        }
    }

    let rubric = &report.feedback.rubric;
    body.push_str(&format!(
        r#"<h2>Rubric / 評分 (1–5)</h2>
<table>
    <tr><th>Pronunciation / 發音</th><td id="pronunciation">{}</td></tr>
    <tr><th>Fluency / 流暢度</th><td id="fluency">{}</td></tr>
    <tr><th>Intonation / 語調</th><td id="intonation">{}</td></tr>
</table>
<h2>Feedback / 回饋</h2>
<div class="feedback">
    <p lang="en">{}</p>
    <p lang="zh-Hant">{}</p>
</div>
"#,
        rubric.pronunciation,
        rubric.fluency,
        rubric.intonation,
        escape_html(&report.feedback.english_text),
        escape_html(&report.feedback.chinese_text),
    ));

    if !report.transcript.is_empty() {
        body.push_str(&format!(
            "<h2>Transcript / 逐字稿</h2>\n<p>{}</p>\n",
            escape_html(report.transcript.as_str())
        ));
    }

    body.push_str("<p><a href=\"/\">Upload another / 再上傳一個</a></p>");

    page("Feedback report", &body)
}
