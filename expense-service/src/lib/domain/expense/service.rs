use std::sync::Arc;

use async_trait::async_trait;
use auth::ownership;
use auth::Identity;
use chrono::Utc;

use crate::expense::errors::ExpenseError;
use crate::expense::models::CreateExpenseCommand;
use crate::expense::models::Expense;
use crate::expense::models::ExpenseId;
use crate::expense::models::Page;
use crate::expense::models::UpdateExpenseCommand;
use crate::expense::ports::ExpenseRepository;
use crate::expense::ports::ExpenseServicePort;
use crate::expense::ports::NewExpense;

/// Domain service implementation for expense operations.
///
/// Ownership policy: id-addressed operations report another owner's expense
/// as `NotFound`; the path-addressed user listing reports a mismatch as
/// `Forbidden`.
pub struct ExpenseService<R>
where
    R: ExpenseRepository,
{
    repository: Arc<R>,
}

impl<R> ExpenseService<R>
where
    R: ExpenseRepository,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Fetch an expense the caller owns; absent and other-owner collapse
    /// into the same `NotFound`.
    async fn find_owned(&self, caller: Identity, id: ExpenseId) -> Result<Expense, ExpenseError> {
        let expense = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(ExpenseError::NotFound(id.to_string()))?;

        ownership::authorize(caller, expense.owner)
            .map_err(|_| ExpenseError::NotFound(id.to_string()))?;

        Ok(expense)
    }
}

#[async_trait]
impl<R> ExpenseServicePort for ExpenseService<R>
where
    R: ExpenseRepository,
{
    async fn create_expense(
        &self,
        caller: Identity,
        command: CreateExpenseCommand,
    ) -> Result<Expense, ExpenseError> {
        self.repository
            .create(NewExpense {
                owner: caller,
                amount: command.amount,
                currency: command.currency,
                category: command.category,
                created_at: Utc::now(),
            })
            .await
    }

    async fn list_expenses(
        &self,
        caller: Identity,
        page: Page,
    ) -> Result<Vec<Expense>, ExpenseError> {
        self.repository.list_by_owner(caller, page).await
    }

    async fn get_expense(&self, caller: Identity, id: ExpenseId) -> Result<Expense, ExpenseError> {
        self.find_owned(caller, id).await
    }

    async fn update_expense(
        &self,
        caller: Identity,
        id: ExpenseId,
        command: UpdateExpenseCommand,
    ) -> Result<Expense, ExpenseError> {
        let mut expense = self.find_owned(caller, id).await?;

        if let Some(amount) = command.amount {
            expense.amount = amount;
        }
        if let Some(currency) = command.currency {
            expense.currency = currency;
        }
        if let Some(category) = command.category {
            expense.category = category;
        }

        self.repository.update(expense).await
    }

    async fn delete_expense(&self, caller: Identity, id: ExpenseId) -> Result<(), ExpenseError> {
        let expense = self.find_owned(caller, id).await?;
        self.repository.delete(expense.id).await
    }

    async fn list_user_expenses(
        &self,
        caller: Identity,
        user: Identity,
        page: Page,
    ) -> Result<Vec<Expense>, ExpenseError> {
        ownership::authorize(caller, user).map_err(|_| ExpenseError::Forbidden)?;
        self.repository.list_by_owner(user, page).await
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;
    use mockall::predicate::*;

    use super::*;
    use crate::expense::models::Amount;
    use crate::expense::models::Category;
    use crate::expense::models::Currency;

    mock! {
        pub TestExpenseRepository {}

        #[async_trait]
        impl ExpenseRepository for TestExpenseRepository {
            async fn create(&self, new_expense: NewExpense) -> Result<Expense, ExpenseError>;
            async fn find_by_id(&self, id: ExpenseId) -> Result<Option<Expense>, ExpenseError>;
            async fn list_by_owner(&self, owner: Identity, page: Page) -> Result<Vec<Expense>, ExpenseError>;
            async fn update(&self, expense: Expense) -> Result<Expense, ExpenseError>;
            async fn delete(&self, id: ExpenseId) -> Result<(), ExpenseError>;
        }
    }

    fn expense(id: i64, owner: i64) -> Expense {
        Expense {
            id: ExpenseId(id),
            owner: Identity(owner),
            amount: Amount::new(12.5).unwrap(),
            currency: Currency::new("USD".to_string()).unwrap(),
            category: Category::new("groceries".to_string()).unwrap(),
            created_at: Utc::now(),
        }
    }

    fn command() -> CreateExpenseCommand {
        CreateExpenseCommand::new(
            Amount::new(12.5).unwrap(),
            Currency::new("USD".to_string()).unwrap(),
            Category::new("groceries".to_string()).unwrap(),
        )
    }

    #[tokio::test]
    async fn test_create_sets_owner_to_caller() {
        let mut repository = MockTestExpenseRepository::new();

        repository
            .expect_create()
            .withf(|new_expense| new_expense.owner == Identity(1))
            .times(1)
            .returning(|new_expense| {
                Ok(Expense {
                    id: ExpenseId(1),
                    owner: new_expense.owner,
                    amount: new_expense.amount,
                    currency: new_expense.currency,
                    category: new_expense.category,
                    created_at: new_expense.created_at,
                })
            });

        let service = ExpenseService::new(Arc::new(repository));
        let created = service
            .create_expense(Identity(1), command())
            .await
            .unwrap();

        assert_eq!(created.owner, Identity(1));
    }

    #[tokio::test]
    async fn test_get_own_expense() {
        let mut repository = MockTestExpenseRepository::new();
        repository
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(Some(expense(1, 1))));

        let service = ExpenseService::new(Arc::new(repository));
        let result = service.get_expense(Identity(1), ExpenseId(1)).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_get_other_owners_expense_reports_not_found() {
        let mut repository = MockTestExpenseRepository::new();
        repository
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(Some(expense(1, 2))));

        let service = ExpenseService::new(Arc::new(repository));
        let result = service.get_expense(Identity(1), ExpenseId(1)).await;

        // Indistinguishable from an absent expense.
        assert!(matches!(result, Err(ExpenseError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_get_absent_expense() {
        let mut repository = MockTestExpenseRepository::new();
        repository
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let service = ExpenseService::new(Arc::new(repository));
        let result = service.get_expense(Identity(1), ExpenseId(99)).await;
        assert!(matches!(result, Err(ExpenseError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_update_other_owners_expense_rejected_before_write() {
        let mut repository = MockTestExpenseRepository::new();
        repository
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(Some(expense(1, 2))));
        repository.expect_update().times(0);

        let service = ExpenseService::new(Arc::new(repository));
        let command = UpdateExpenseCommand {
            amount: Some(Amount::new(99.0).unwrap()),
            currency: None,
            category: None,
        };
        let result = service
            .update_expense(Identity(1), ExpenseId(1), command)
            .await;

        assert!(matches!(result, Err(ExpenseError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_update_applies_only_provided_fields() {
        let mut repository = MockTestExpenseRepository::new();
        repository
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(Some(expense(1, 1))));
        repository
            .expect_update()
            .withf(|e| {
                e.amount.as_f64() == 99.0
                    && e.currency.as_str() == "USD"
                    && e.category.as_str() == "groceries"
            })
            .times(1)
            .returning(|e| Ok(e));

        let service = ExpenseService::new(Arc::new(repository));
        let command = UpdateExpenseCommand {
            amount: Some(Amount::new(99.0).unwrap()),
            currency: None,
            category: None,
        };
        let updated = service
            .update_expense(Identity(1), ExpenseId(1), command)
            .await
            .unwrap();

        assert_eq!(updated.amount.as_f64(), 99.0);
    }

    #[tokio::test]
    async fn test_delete_other_owners_expense_rejected_before_delete() {
        let mut repository = MockTestExpenseRepository::new();
        repository
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(Some(expense(1, 2))));
        repository.expect_delete().times(0);

        let service = ExpenseService::new(Arc::new(repository));
        let result = service.delete_expense(Identity(1), ExpenseId(1)).await;
        assert!(matches!(result, Err(ExpenseError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_list_user_expenses_mismatch_is_forbidden() {
        let mut repository = MockTestExpenseRepository::new();
        repository.expect_list_by_owner().times(0);

        let service = ExpenseService::new(Arc::new(repository));
        let result = service
            .list_user_expenses(Identity(1), Identity(2), Page::default())
            .await;

        assert!(matches!(result, Err(ExpenseError::Forbidden)));
    }

    #[tokio::test]
    async fn test_list_user_expenses_own() {
        let mut repository = MockTestExpenseRepository::new();
        repository
            .expect_list_by_owner()
            .withf(|owner, _| *owner == Identity(1))
            .times(1)
            .returning(|_, _| Ok(vec![expense(1, 1)]));

        let service = ExpenseService::new(Arc::new(repository));
        let expenses = service
            .list_user_expenses(Identity(1), Identity(1), Page::default())
            .await
            .unwrap();

        assert_eq!(expenses.len(), 1);
    }
}
