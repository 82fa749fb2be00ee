pub mod admin;
pub mod auth;
pub mod profile;
pub mod sections;
pub mod wizard;

pub use auth::{ErrorInfo, LoginRequest, LoginResponse, Role, SessionUser, StoredSession, VerifyResponse};
pub use profile::{
    BuyerProfile, BuyerProfileEnvelope, SellerListing, SellerProfile, SellersResponse,
    UpdateBuyerProfileRequest, UpdateSellerProfileRequest, UploadResponse,
};
pub use sections::{
    CertificationRecord, FieldInput, FieldSpec, LanguageRecord, ProjectRecord, RoleRecord,
    SectionData, SectionKind, SUMMARY_MAX_LEN,
};
pub use wizard::{SaveStepRequest, SaveStepResponse, TaglineResponse, WizardStateResponse};
