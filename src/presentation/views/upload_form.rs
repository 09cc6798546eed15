use crate::domain::AudioFormat;

use super::layout::page;

pub fn render_upload_form(max_file_size_mb: usize) -> String {
    let accept = AudioFormat::ALL
        .iter()
        .map(|f| format!(".{}", f.extension()))
        .collect::<Vec<_>>()
        .join(",");

    let body = format!(
        r#"<h1>Speech practice feedback / 口說練習回饋</h1>
<p>Upload a recording ({accept}, up to {max_file_size_mb} MB) to receive a short report.</p>
<form action="/upload" method="post" enctype="multipart/form-data">
    <label>Recording / 錄音檔 <input type="file" name="file" accept="{accept}" required></label>
    <label>Student name / 學生姓名 <input type="text" name="student_name"></label>
    <label>Age / 年齡 <input type="text" name="age"></label>
    <label>Notes / 備註 <textarea name="notes" rows="3"></textarea></label>
    <p><button type="submit">Analyze / 分析</button></p>
</form>"#,
    );

    page("Speech practice feedback", &body)
}
