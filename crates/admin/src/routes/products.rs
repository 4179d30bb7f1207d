//! Product management routes.

use askama::Template;
use axum::{
    Form,
    extract::{Multipart, Path, Query, State},
    response::{Html, IntoResponse, Redirect, Response},
};
use tracing::instrument;

use bristle_core::ProductId;

use crate::components::data_table::{DataTableConfig, FilterOption, products_table_config};
use crate::error::{AppError, Result};
use crate::forms::ProductForm;
use crate::middleware::{CspNonce, RequireStaffAuth};
use crate::platform::types::{Category, Product, ProductQuery};
use crate::platform::{ApiError, FieldError};
use crate::state::AppState;
use crate::views::{Paging, ProductRow, filter_suffix};

use super::dashboard::StaffView;

/// Products table template.
#[derive(Template)]
#[template(path = "products/index.html")]
pub struct ProductsTemplate {
    pub staff: StaffView,
    pub current_path: String,
    pub table: DataTableConfig,
    pub rows: Vec<ProductRow>,
    pub query: ProductQuery,
    pub paging: Paging,
    pub filter_suffix: String,
    pub nonce: String,
}

/// Product create/edit form template.
#[derive(Template)]
#[template(path = "products/form.html")]
pub struct ProductFormTemplate {
    pub staff: StaffView,
    pub current_path: String,
    pub form: ProductForm,
    pub categories: Vec<Category>,
    pub errors: Vec<FieldError>,
    /// Present when editing an existing product.
    pub editing: Option<EditContext>,
    pub saved: bool,
    pub nonce: String,
}

/// Extra context shown only on the edit screen.
#[derive(Debug, Clone)]
pub struct EditContext {
    pub id: i64,
    pub image_url: Option<String>,
    pub guide_url: Option<String>,
}

impl ProductFormTemplate {
    fn action(&self) -> String {
        self.editing
            .as_ref()
            .map_or_else(|| "/products".to_string(), |e| format!("/products/{}", e.id))
    }

    fn error_for(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }
}

fn form_from_product(product: &Product) -> ProductForm {
    let (discount_kind, discount_value) = match product.discount {
        Some(bristle_core::Discount::Percentage(pct)) => ("percentage".to_string(), pct.to_string()),
        Some(bristle_core::Discount::Fixed(amount)) => ("fixed".to_string(), amount.to_string()),
        None => ("none".to_string(), String::new()),
    };
    ProductForm {
        name: product.name.clone(),
        handle: product.handle.clone(),
        description: product.description.clone(),
        category_id: product
            .category
            .as_ref()
            .map(|c| c.id.to_string())
            .unwrap_or_default(),
        price: product.price.to_string(),
        stock: product.stock.to_string(),
        discount_kind,
        discount_value,
        status: product.status.as_str().to_string(),
        featured: product.featured.then(|| "on".to_string()),
    }
}

fn edit_context(product: &Product) -> EditContext {
    EditContext {
        id: product.id.as_i64(),
        image_url: product.image_url.clone(),
        guide_url: product.guide_url.clone(),
    }
}

fn category_options(categories: &[Category]) -> Vec<FilterOption> {
    categories
        .iter()
        .map(|c| FilterOption::new(&c.slug, &c.name))
        .collect()
}

/// Products list with server-driven search, filters, and pagination.
#[instrument(skip_all)]
pub async fn index(
    State(state): State<AppState>,
    RequireStaffAuth(auth): RequireStaffAuth,
    Query(query): Query<ProductQuery>,
    CspNonce(nonce): CspNonce,
) -> Result<Html<String>> {
    let token = auth.token.as_str();
    let page = state.api().list_products(token, &query).await?;
    let categories = state.api().list_categories(token).await?;

    let template = ProductsTemplate {
        staff: StaffView::from(&auth.staff),
        current_path: "/products".to_string(),
        table: products_table_config(category_options(&categories)),
        rows: page.items.iter().map(ProductRow::from).collect(),
        paging: Paging::from_page(&page),
        filter_suffix: filter_suffix(&query.to_query()),
        query,
        nonce,
    };
    Ok(Html(template.render()?))
}

/// Blank product form.
#[instrument(skip_all)]
pub async fn new_page(
    State(state): State<AppState>,
    RequireStaffAuth(auth): RequireStaffAuth,
    CspNonce(nonce): CspNonce,
) -> Result<Html<String>> {
    let categories = state.api().list_categories(auth.token.as_str()).await?;

    let template = ProductFormTemplate {
        staff: StaffView::from(&auth.staff),
        current_path: "/products".to_string(),
        form: ProductForm {
            status: "draft".to_string(),
            discount_kind: "none".to_string(),
            ..ProductForm::default()
        },
        categories,
        errors: Vec::new(),
        editing: None,
        saved: false,
        nonce,
    };
    Ok(Html(template.render()?))
}

/// Create a product; local validation runs before any network call.
#[instrument(skip_all)]
pub async fn create(
    State(state): State<AppState>,
    RequireStaffAuth(auth): RequireStaffAuth,
    CspNonce(nonce): CspNonce,
    Form(form): Form<ProductForm>,
) -> Result<Response> {
    let token = auth.token.as_str();

    let payload = match form.validate() {
        Ok(payload) => payload,
        Err(errors) => {
            let categories = state.api().list_categories(token).await?;
            let template = ProductFormTemplate {
                staff: StaffView::from(&auth.staff),
                current_path: "/products".to_string(),
                form,
                categories,
                errors,
                editing: None,
                saved: false,
                nonce,
            };
            return Ok(Html(template.render()?).into_response());
        }
    };

    match state.api().create_product(token, &payload).await {
        Ok(product) => Ok(Redirect::to(&format!("/products/{}/edit", product.id)).into_response()),
        Err(ApiError::Validation(errors)) => {
            let categories = state.api().list_categories(token).await?;
            let template = ProductFormTemplate {
                staff: StaffView::from(&auth.staff),
                current_path: "/products".to_string(),
                form,
                categories,
                errors,
                editing: None,
                saved: false,
                nonce,
            };
            Ok(Html(template.render()?).into_response())
        }
        Err(e) => Err(e.into()),
    }
}

/// Edit form pre-filled from the server's view of the product.
#[instrument(skip_all, fields(product_id = %id))]
pub async fn edit_page(
    State(state): State<AppState>,
    RequireStaffAuth(auth): RequireStaffAuth,
    Path(id): Path<i64>,
    CspNonce(nonce): CspNonce,
) -> Result<Html<String>> {
    let token = auth.token.as_str();
    let product = state.api().get_product(token, ProductId::new(id)).await?;
    let categories = state.api().list_categories(token).await?;

    let template = ProductFormTemplate {
        staff: StaffView::from(&auth.staff),
        current_path: "/products".to_string(),
        form: form_from_product(&product),
        categories,
        errors: Vec::new(),
        editing: Some(edit_context(&product)),
        saved: false,
        nonce,
    };
    Ok(Html(template.render()?))
}

/// Update a product; local validation runs before any network call.
#[instrument(skip_all, fields(product_id = %id))]
pub async fn update(
    State(state): State<AppState>,
    RequireStaffAuth(auth): RequireStaffAuth,
    Path(id): Path<i64>,
    CspNonce(nonce): CspNonce,
    Form(form): Form<ProductForm>,
) -> Result<Response> {
    let token = auth.token.as_str();
    let product_id = ProductId::new(id);

    let render = |form: ProductForm,
                  categories: Vec<Category>,
                  errors: Vec<FieldError>,
                  editing: Option<EditContext>,
                  saved: bool|
     -> Result<Response> {
        let template = ProductFormTemplate {
            staff: StaffView::from(&auth.staff),
            current_path: "/products".to_string(),
            form,
            categories,
            errors,
            editing,
            saved,
            nonce,
        };
        Ok(Html(template.render()?).into_response())
    };

    let payload = match form.validate() {
        Ok(payload) => payload,
        Err(errors) => {
            let product = state.api().get_product(token, product_id).await?;
            let categories = state.api().list_categories(token).await?;
            return render(form, categories, errors, Some(edit_context(&product)), false);
        }
    };

    match state.api().update_product(token, product_id, &payload).await {
        Ok(product) => {
            let categories = state.api().list_categories(token).await?;
            render(
                form_from_product(&product),
                categories,
                Vec::new(),
                Some(edit_context(&product)),
                true,
            )
        }
        Err(ApiError::Validation(errors)) => {
            let product = state.api().get_product(token, product_id).await?;
            let categories = state.api().list_categories(token).await?;
            render(form, categories, errors, Some(edit_context(&product)), false)
        }
        Err(e) => Err(e.into()),
    }
}

/// Delete a product.
#[instrument(skip_all, fields(product_id = %id))]
pub async fn delete(
    State(state): State<AppState>,
    RequireStaffAuth(auth): RequireStaffAuth,
    Path(id): Path<i64>,
) -> Result<Response> {
    state
        .api()
        .delete_product(auth.token.as_str(), ProductId::new(id))
        .await?;
    Ok(Redirect::to("/products").into_response())
}

/// Upload a product image (multipart passthrough to the Platform API).
#[instrument(skip_all, fields(product_id = %id))]
pub async fn upload_image(
    State(state): State<AppState>,
    RequireStaffAuth(auth): RequireStaffAuth,
    Path(id): Path<i64>,
    multipart: Multipart,
) -> Result<Response> {
    upload_file(&state, auth.token.as_str(), ProductId::new(id), multipart, "image").await
}

/// Upload a user-guide PDF (multipart passthrough to the Platform API).
#[instrument(skip_all, fields(product_id = %id))]
pub async fn upload_guide(
    State(state): State<AppState>,
    RequireStaffAuth(auth): RequireStaffAuth,
    Path(id): Path<i64>,
    multipart: Multipart,
) -> Result<Response> {
    upload_file(&state, auth.token.as_str(), ProductId::new(id), multipart, "guide").await
}

async fn upload_file(
    state: &AppState,
    token: &str,
    id: ProductId,
    mut multipart: Multipart,
    field_name: &str,
) -> Result<Response> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        if field.name() == Some(field_name) {
            let filename = field.file_name().unwrap_or(field_name).to_string();
            let bytes = field
                .bytes()
                .await
                .map_err(|e| AppError::BadRequest(e.to_string()))?;

            match field_name {
                "image" => {
                    state
                        .api()
                        .upload_product_image(token, id, filename, bytes.to_vec())
                        .await?;
                }
                _ => {
                    state
                        .api()
                        .upload_product_guide(token, id, filename, bytes.to_vec())
                        .await?;
                }
            }

            return Ok(Redirect::to(&format!("/products/{id}/edit")).into_response());
        }
    }

    Err(AppError::BadRequest(format!("Missing {field_name} field")))
}
