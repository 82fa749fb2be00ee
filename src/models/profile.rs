use serde::{Deserialize, Serialize};
use crate::models::sections::{CertificationRecord, LanguageRecord, ProjectRecord};

/// The seller's own profile record: display fields plus the image reference.
/// Section payloads live behind the wizard endpoint, not here.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct SellerProfile {
    pub display_name: String,
    pub email: String,
    pub title: String,
    pub location: String,
    pub hourly_rate: Option<u32>,
    pub tagline: Option<String>,
    pub rating: Option<f32>,
    pub review_count: u32,
    pub profile_image: Option<String>,
    pub member_since: Option<String>,
}

#[derive(Clone, PartialEq, Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSellerProfileRequest {
    pub display_name: String,
    pub title: String,
    pub location: String,
    pub hourly_rate: Option<u32>,
}

/// Buyer profile travels wrapped in a `profile` envelope.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct BuyerProfile {
    pub display_name: String,
    pub email: String,
    pub company: String,
    pub industry: String,
    pub location: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
#[serde(default)]
pub struct BuyerProfileEnvelope {
    pub profile: BuyerProfile,
}

#[derive(Clone, PartialEq, Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBuyerProfileRequest {
    pub display_name: String,
    pub company: String,
    pub industry: String,
    pub location: String,
}

/// Read-only projection of one seller as the buyer dashboard renders it.
/// Computed server-side; the client treats it as an immutable snapshot.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct SellerListing {
    pub id: String,
    pub display_name: String,
    pub title: String,
    pub location: String,
    pub tagline: Option<String>,
    pub rating: Option<f32>,
    pub review_count: u32,
    pub hourly_rate: Option<u32>,
    pub profile_image: Option<String>,
    pub technical_skills: Vec<String>,
    pub services_offered: Vec<String>,
    pub certifications: Vec<CertificationRecord>,
    pub languages: Vec<LanguageRecord>,
    pub projects: Vec<ProjectRecord>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct SellersResponse {
    pub sellers: Vec<SellerListing>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    pub profile_image: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seller_profile_parses_the_flat_projection() {
        let json = r#"{
            "displayName": "Amara Okafor",
            "email": "amara@example.com",
            "title": "SAP FI/CO Consultant",
            "location": "Berlin, Germany",
            "hourlyRate": 120,
            "tagline": "SAP FI certified consultant with 8 years in retail rollouts",
            "rating": 4.8,
            "reviewCount": 31,
            "profileImage": "/uploads/amara.png"
        }"#;
        let profile: SellerProfile = serde_json::from_str(json).expect("profile should parse");
        assert_eq!(profile.display_name, "Amara Okafor");
        assert_eq!(profile.hourly_rate, Some(120));
        assert_eq!(profile.profile_image.as_deref(), Some("/uploads/amara.png"));
    }

    #[test]
    fn buyer_profile_arrives_wrapped_in_an_envelope() {
        let json = r#"{"profile":{"displayName":"Lee Chen","email":"lee@acme.com","company":"Acme Retail","industry":"Retail","location":"Singapore"}}"#;
        let envelope: BuyerProfileEnvelope = serde_json::from_str(json).expect("envelope should parse");
        assert_eq!(envelope.profile.company, "Acme Retail");
    }

    #[test]
    fn listings_tolerate_sparse_records() {
        let json = r#"{"sellers":[{"id":"s-1","displayName":"Priya Nair"}]}"#;
        let response: SellersResponse = serde_json::from_str(json).expect("listings should parse");
        assert_eq!(response.sellers.len(), 1);
        assert!(response.sellers[0].technical_skills.is_empty());
        assert!(response.sellers[0].rating.is_none());
    }
}
