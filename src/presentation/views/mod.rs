mod error_page;
mod layout;
mod report;
mod upload_form;

pub use error_page::render_error_page;
pub use layout::escape_html;
pub use report::render_report;
pub use upload_form::render_upload_form;
