// ============================================================================
// PROFILE SERVICE - seller/buyer profiles, directory, image upload
// ============================================================================

use serde::{Deserialize, Serialize};
use web_sys::{File, FormData};

use crate::models::{
    BuyerProfile, BuyerProfileEnvelope, SellerListing, SellerProfile, SellersResponse,
    UpdateBuyerProfileRequest, UpdateSellerProfileRequest, UploadResponse,
};
use crate::services::http::{self, ApiError};
use crate::utils::{load_from_storage, save_to_storage, STORAGE_KEY_SELLERS_CACHE};

const SELLERS_CACHE_DURATION_HOURS: i64 = 24;

/// Directory snapshot kept in localStorage so buyers browsing back and
/// forth do not refetch the whole listing every time.
#[derive(Serialize, Deserialize)]
struct SellersCache {
    sellers: Vec<SellerListing>,
    timestamp: String,
}

pub async fn fetch_seller_profile(token: &str) -> Result<SellerProfile, ApiError> {
    http::get_json("/v1/sellers/profile", token).await
}

pub async fn update_seller_profile(
    token: &str,
    request: &UpdateSellerProfileRequest,
) -> Result<SellerProfile, ApiError> {
    log::info!("💾 Updating seller profile");
    http::put_json("/v1/sellers/profile", token, request).await
}

/// Buyer profile payloads travel wrapped in a `profile` envelope, unlike
/// the flat seller shape.
pub async fn fetch_buyer_profile(token: &str) -> Result<BuyerProfile, ApiError> {
    let envelope: BuyerProfileEnvelope = http::get_json("/v1/buyers/profile", token).await?;
    Ok(envelope.profile)
}

#[derive(Serialize)]
struct BuyerUpdateEnvelope<'a> {
    profile: &'a UpdateBuyerProfileRequest,
}

pub async fn update_buyer_profile(
    token: &str,
    request: &UpdateBuyerProfileRequest,
) -> Result<BuyerProfile, ApiError> {
    log::info!("💾 Updating buyer profile");
    let envelope = BuyerUpdateEnvelope { profile: request };
    let reply: BuyerProfileEnvelope =
        http::put_json("/v1/buyers/profile", token, &envelope).await?;
    Ok(reply.profile)
}

/// Load the seller directory, serving a cached copy when it is fresh
/// enough. `force_refresh` skips the cache after a profile mutation.
pub async fn load_sellers(token: &str, force_refresh: bool) -> Result<Vec<SellerListing>, ApiError> {
    if !force_refresh {
        if let Some(cache) = load_from_storage::<SellersCache>(STORAGE_KEY_SELLERS_CACHE) {
            if let Ok(cached_at) = chrono::DateTime::parse_from_rfc3339(&cache.timestamp) {
                let age = chrono::Utc::now().signed_duration_since(cached_at);
                if age.num_hours() < SELLERS_CACHE_DURATION_HOURS {
                    log::info!("📦 Using cached seller directory ({} sellers)", cache.sellers.len());
                    return Ok(cache.sellers);
                }
            }
        }
    }

    log::info!("🌐 Fetching seller directory...");
    let response: SellersResponse = http::get_json("/v1/sellers", token).await?;

    let cache = SellersCache {
        sellers: response.sellers.clone(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    };
    if let Err(e) = save_to_storage(STORAGE_KEY_SELLERS_CACHE, &cache) {
        log::warn!("⚠️ Could not cache the seller directory: {}", e);
    }

    Ok(response.sellers)
}

/// Upload a new profile photo as `multipart/form-data` under the
/// `profileImage` field. Returns the URL the backend stored it at.
pub async fn upload_profile_image(token: &str, file: File) -> Result<UploadResponse, ApiError> {
    log::info!("📷 Uploading profile image {}", file.name());

    let form = FormData::new()
        .map_err(|_| ApiError::Network("could not build the upload form".to_string()))?;
    form.append_with_blob("profileImage", &file)
        .map_err(|_| ApiError::Network("could not attach the image".to_string()))?;

    http::post_multipart("/v1/uploads/profile-image", token, form).await
}
