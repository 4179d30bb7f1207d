//! Staff account management routes. All Manager-only.

use askama::Template;
use axum::{
    Form,
    extract::{Path, State},
    response::{Html, IntoResponse, Redirect, Response},
};
use tracing::instrument;

use bristle_core::{StaffId, StaffRole};

use crate::components::data_table::{DataTableConfig, staff_table_config};
use crate::error::Result;
use crate::forms::StaffForm;
use crate::middleware::{CspNonce, RequireManager};
use crate::platform::types::StaffMember;
use crate::platform::{ApiError, FieldError};
use crate::state::AppState;
use crate::views::format_date;

use super::dashboard::StaffView;

/// Staff row for the staff table.
#[derive(Debug, Clone)]
pub struct StaffRow {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: String,
    pub added: String,
}

impl From<&StaffMember> for StaffRow {
    fn from(member: &StaffMember) -> Self {
        Self {
            id: member.id.as_i64(),
            name: member.name.clone(),
            email: member.email.to_string(),
            role: member.role.label().to_string(),
            added: format_date(member.created_at),
        }
    }
}

/// Staff table template.
#[derive(Template)]
#[template(path = "staff/index.html")]
pub struct StaffListTemplate {
    pub staff: StaffView,
    pub current_path: String,
    pub table: DataTableConfig,
    pub rows: Vec<StaffRow>,
    pub nonce: String,
}

/// Staff create/edit form template.
#[derive(Template)]
#[template(path = "staff/form.html")]
pub struct StaffFormTemplate {
    pub staff: StaffView,
    pub current_path: String,
    pub form: StaffForm,
    pub roles: Vec<(String, String)>,
    pub errors: Vec<FieldError>,
    pub editing: Option<i64>,
    pub saved: bool,
    pub nonce: String,
}

impl StaffFormTemplate {
    fn action(&self) -> String {
        self.editing
            .map_or_else(|| "/staff".to_string(), |id| format!("/staff/{id}"))
    }

    fn error_for(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }
}

fn role_options() -> Vec<(String, String)> {
    [StaffRole::Manager, StaffRole::Staff, StaffRole::Viewer]
        .iter()
        .map(|role| (role.to_string(), role.label().to_string()))
        .collect()
}

fn form_from_member(member: &StaffMember) -> StaffForm {
    StaffForm {
        email: member.email.to_string(),
        name: member.name.clone(),
        role: member.role.to_string(),
    }
}

/// Staff accounts list.
#[instrument(skip_all)]
pub async fn index(
    State(state): State<AppState>,
    RequireManager(auth): RequireManager,
    CspNonce(nonce): CspNonce,
) -> Result<Html<String>> {
    let members = state.api().list_staff(auth.token.as_str()).await?;

    let template = StaffListTemplate {
        staff: StaffView::from(&auth.staff),
        current_path: "/staff".to_string(),
        table: staff_table_config(),
        rows: members.iter().map(StaffRow::from).collect(),
        nonce,
    };
    Ok(Html(template.render()?))
}

/// Blank staff form.
#[instrument(skip_all)]
pub async fn new_page(
    RequireManager(auth): RequireManager,
    CspNonce(nonce): CspNonce,
) -> Result<Html<String>> {
    let template = StaffFormTemplate {
        staff: StaffView::from(&auth.staff),
        current_path: "/staff".to_string(),
        form: StaffForm {
            role: "staff".to_string(),
            ..StaffForm::default()
        },
        roles: role_options(),
        errors: Vec::new(),
        editing: None,
        saved: false,
        nonce,
    };
    Ok(Html(template.render()?))
}

/// Create a staff account; local validation runs before any network call.
#[instrument(skip_all)]
pub async fn create(
    State(state): State<AppState>,
    RequireManager(auth): RequireManager,
    CspNonce(nonce): CspNonce,
    Form(form): Form<StaffForm>,
) -> Result<Response> {
    let render = |form: StaffForm, errors: Vec<FieldError>| -> Result<Response> {
        let template = StaffFormTemplate {
            staff: StaffView::from(&auth.staff),
            current_path: "/staff".to_string(),
            form,
            roles: role_options(),
            errors,
            editing: None,
            saved: false,
            nonce,
        };
        Ok(Html(template.render()?).into_response())
    };

    let payload = match form.validate() {
        Ok(payload) => payload,
        Err(errors) => return render(form, errors),
    };

    match state.api().create_staff(auth.token.as_str(), &payload).await {
        Ok(_) => Ok(Redirect::to("/staff").into_response()),
        Err(ApiError::Validation(errors)) => render(form, errors),
        Err(e) => Err(e.into()),
    }
}

/// Edit form pre-filled from the current staff account.
#[instrument(skip_all, fields(staff_id = %id))]
pub async fn edit_page(
    State(state): State<AppState>,
    RequireManager(auth): RequireManager,
    Path(id): Path<i64>,
    CspNonce(nonce): CspNonce,
) -> Result<Html<String>> {
    let members = state.api().list_staff(auth.token.as_str()).await?;
    let member = members
        .iter()
        .find(|m| m.id == StaffId::new(id))
        .ok_or_else(|| crate::error::AppError::NotFound(format!("staff {id}")))?;

    let template = StaffFormTemplate {
        staff: StaffView::from(&auth.staff),
        current_path: "/staff".to_string(),
        form: form_from_member(member),
        roles: role_options(),
        errors: Vec::new(),
        editing: Some(id),
        saved: false,
        nonce,
    };
    Ok(Html(template.render()?))
}

/// Update a staff account; local validation runs before any network call.
#[instrument(skip_all, fields(staff_id = %id))]
pub async fn update(
    State(state): State<AppState>,
    RequireManager(auth): RequireManager,
    Path(id): Path<i64>,
    CspNonce(nonce): CspNonce,
    Form(form): Form<StaffForm>,
) -> Result<Response> {
    let render = |form: StaffForm, errors: Vec<FieldError>, saved: bool| -> Result<Response> {
        let template = StaffFormTemplate {
            staff: StaffView::from(&auth.staff),
            current_path: "/staff".to_string(),
            form,
            roles: role_options(),
            errors,
            editing: Some(id),
            saved,
            nonce,
        };
        Ok(Html(template.render()?).into_response())
    };

    let payload = match form.validate() {
        Ok(payload) => payload,
        Err(errors) => return render(form, errors, false),
    };

    match state
        .api()
        .update_staff(auth.token.as_str(), StaffId::new(id), &payload)
        .await
    {
        Ok(member) => render(form_from_member(&member), Vec::new(), true),
        Err(ApiError::Validation(errors)) => render(form, errors, false),
        Err(e) => Err(e.into()),
    }
}

/// Delete a staff account.
#[instrument(skip_all, fields(staff_id = %id))]
pub async fn delete(
    State(state): State<AppState>,
    RequireManager(auth): RequireManager,
    Path(id): Path<i64>,
) -> Result<Response> {
    state
        .api()
        .delete_staff(auth.token.as_str(), StaffId::new(id))
        .await?;
    Ok(Redirect::to("/staff").into_response())
}
