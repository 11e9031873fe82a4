pub mod confirm_dialog;
pub mod diagram;
pub mod markdown_view;
pub mod summary_panel;
pub mod tilt_card;
pub mod toast;

#[allow(unused_imports)]
pub use confirm_dialog::ConfirmDialog;
#[allow(unused_imports)]
pub use diagram::Diagram;
#[allow(unused_imports)]
pub use markdown_view::MarkdownView;
#[allow(unused_imports)]
pub use summary_panel::SummaryPanel;
#[allow(unused_imports)]
pub use tilt_card::TiltCard;
#[allow(unused_imports)]
pub use toast::Toast;
