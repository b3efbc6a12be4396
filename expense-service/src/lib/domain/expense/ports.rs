use async_trait::async_trait;
use auth::Identity;
use chrono::DateTime;
use chrono::Utc;

use crate::expense::errors::ExpenseError;
use crate::expense::models::Amount;
use crate::expense::models::Category;
use crate::expense::models::CreateExpenseCommand;
use crate::expense::models::Currency;
use crate::expense::models::Expense;
use crate::expense::models::ExpenseId;
use crate::expense::models::Page;
use crate::expense::models::UpdateExpenseCommand;

/// Port for expense domain service operations.
///
/// Every operation takes the authenticated caller; ownership is enforced
/// here, before storage is touched for a decision.
#[async_trait]
pub trait ExpenseServicePort: Send + Sync + 'static {
    /// Create an expense owned by the caller.
    async fn create_expense(
        &self,
        caller: Identity,
        command: CreateExpenseCommand,
    ) -> Result<Expense, ExpenseError>;

    /// List the caller's own expenses.
    async fn list_expenses(&self, caller: Identity, page: Page)
        -> Result<Vec<Expense>, ExpenseError>;

    /// Retrieve one expense.
    ///
    /// # Errors
    /// * `NotFound` - Absent, or owned by someone else
    async fn get_expense(&self, caller: Identity, id: ExpenseId) -> Result<Expense, ExpenseError>;

    /// Update an expense with optional fields.
    ///
    /// # Errors
    /// * `NotFound` - Absent, or owned by someone else
    async fn update_expense(
        &self,
        caller: Identity,
        id: ExpenseId,
        command: UpdateExpenseCommand,
    ) -> Result<Expense, ExpenseError>;

    /// Delete an expense.
    ///
    /// # Errors
    /// * `NotFound` - Absent, or owned by someone else
    async fn delete_expense(&self, caller: Identity, id: ExpenseId) -> Result<(), ExpenseError>;

    /// List expenses for an explicitly named user.
    ///
    /// # Errors
    /// * `Forbidden` - `user` is not the caller
    async fn list_user_expenses(
        &self,
        caller: Identity,
        user: Identity,
        page: Page,
    ) -> Result<Vec<Expense>, ExpenseError>;
}

/// New expense awaiting an id from the store.
#[derive(Debug, Clone)]
pub struct NewExpense {
    pub owner: Identity,
    pub amount: Amount,
    pub currency: Currency,
    pub category: Category,
    pub created_at: DateTime<Utc>,
}

/// Persistence operations for the expense aggregate.
#[async_trait]
pub trait ExpenseRepository: Send + Sync + 'static {
    /// Persist a new expense, returning it with its assigned id.
    async fn create(&self, new_expense: NewExpense) -> Result<Expense, ExpenseError>;

    /// Retrieve an expense by identifier, regardless of owner.
    async fn find_by_id(&self, id: ExpenseId) -> Result<Option<Expense>, ExpenseError>;

    /// Retrieve a page of one owner's expenses, oldest first.
    async fn list_by_owner(&self, owner: Identity, page: Page)
        -> Result<Vec<Expense>, ExpenseError>;

    /// Update an existing expense in storage.
    async fn update(&self, expense: Expense) -> Result<Expense, ExpenseError>;

    /// Remove an expense from storage.
    async fn delete(&self, id: ExpenseId) -> Result<(), ExpenseError>;
}
