pub mod admin_dashboard;
pub mod app;
pub mod buyer_dashboard;
pub mod header;
pub mod login_screen;
pub mod photo_uploader;
pub mod profile_wizard;
pub mod section_editor;
pub mod section_form;
pub mod seller_dashboard;
pub mod toast;

pub use admin_dashboard::AdminDashboard;
pub use app::App;
pub use buyer_dashboard::BuyerDashboard;
pub use header::Header;
pub use login_screen::LoginScreen;
pub use photo_uploader::PhotoUploader;
pub use profile_wizard::ProfileWizard;
pub use section_editor::SectionEditor;
pub use section_form::SectionForm;
pub use seller_dashboard::SellerDashboard;
pub use toast::Toast;
