use auth::Identity;
use axum::extract::Path;
use axum::extract::State;
use axum::Extension;
use axum::Json;
use serde::Deserialize;

use super::create_expense::ParseCreateExpenseRequestError;
use super::ApiError;
use super::ExpenseResponseData;
use crate::expense::models::Amount;
use crate::expense::models::Category;
use crate::expense::models::Currency;
use crate::expense::models::ExpenseId;
use crate::expense::models::UpdateExpenseCommand;
use crate::expense::ports::ExpenseServicePort;
use crate::inbound::http::router::AppState;

/// HTTP request body for updating an expense; omitted fields keep their
/// stored value.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UpdateExpenseRequest {
    pub amount: Option<f64>,
    pub currency: Option<String>,
    pub category: Option<String>,
}

impl UpdateExpenseRequest {
    fn try_into_command(self) -> Result<UpdateExpenseCommand, ParseCreateExpenseRequestError> {
        let amount = self.amount.map(Amount::new).transpose()?;
        let currency = self.currency.map(Currency::new).transpose()?;
        let category = self.category.map(Category::new).transpose()?;

        Ok(UpdateExpenseCommand {
            amount,
            currency,
            category,
        })
    }
}

pub async fn update_expense(
    State(state): State<AppState>,
    Extension(caller): Extension<Identity>,
    Path(expense_id): Path<i64>,
    Json(body): Json<UpdateExpenseRequest>,
) -> Result<Json<ExpenseResponseData>, ApiError> {
    let command = body.try_into_command()?;

    state
        .expense_service
        .update_expense(caller, ExpenseId(expense_id), command)
        .await
        .map_err(ApiError::from)
        .map(|ref expense| Json(expense.into()))
}
