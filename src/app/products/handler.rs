//! 产品处理器

use axum::{body::Bytes, response::Json};
use serde::{Deserialize, Serialize};

use super::model::Product;
use crate::core::{error::CoreError, extract::optional_json, response::ApiResponse};

#[derive(Debug, Default, Deserialize)]
pub struct CreateProductRequest {
    pub title: Option<String>,
    pub price: Option<f64>,
    /// 可选：创建后立即调用 `set_price`
    pub value: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct ProductView {
    #[serde(flatten)]
    pub product: Product,
    pub total_price: f64,
}

pub async fn create_product(
    body: Bytes,
) -> Result<Json<ApiResponse<ProductView>>, CoreError> {
    let request: CreateProductRequest = optional_json(&body)?.unwrap_or_default();
    let mut product = Product::new(request.title, request.price);

    if request.value.is_some() {
        product
            .set_price(request.value)
            .map_err(|e| CoreError::BadRequest(e.to_string()))?;
    }

    let total_price = product.get_price();
    Ok(Json(ApiResponse::success(ProductView {
        product,
        total_price,
    })))
}
