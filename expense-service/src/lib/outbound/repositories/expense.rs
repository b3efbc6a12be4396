use async_trait::async_trait;
use auth::Identity;
use chrono::DateTime;
use chrono::Utc;
use sqlx::SqlitePool;

use crate::expense::errors::ExpenseError;
use crate::expense::models::Amount;
use crate::expense::models::Category;
use crate::expense::models::Currency;
use crate::expense::models::Expense;
use crate::expense::models::ExpenseId;
use crate::expense::models::Page;
use crate::expense::ports::ExpenseRepository;
use crate::expense::ports::NewExpense;

#[derive(sqlx::FromRow)]
struct ExpenseRow {
    id: i64,
    user_id: i64,
    amount: f64,
    currency: String,
    category: String,
    created_at: DateTime<Utc>,
}

impl ExpenseRow {
    fn into_expense(self) -> Result<Expense, ExpenseError> {
        Ok(Expense {
            id: ExpenseId(self.id),
            owner: Identity(self.user_id),
            amount: Amount::new(self.amount)?,
            currency: Currency::new(self.currency)?,
            category: Category::new(self.category)?,
            created_at: self.created_at,
        })
    }
}

pub struct SqliteExpenseRepository {
    pool: SqlitePool,
}

impl SqliteExpenseRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ExpenseRepository for SqliteExpenseRepository {
    async fn create(&self, new_expense: NewExpense) -> Result<Expense, ExpenseError> {
        let result = sqlx::query(
            "INSERT INTO expenses (user_id, amount, currency, category, created_at) \
             VALUES (?1, ?2, ?3, ?4, ?5)",
        )
        .bind(new_expense.owner.as_i64())
        .bind(new_expense.amount.as_f64())
        .bind(new_expense.currency.as_str())
        .bind(new_expense.category.as_str())
        .bind(new_expense.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| ExpenseError::DatabaseError(e.to_string()))?;

        Ok(Expense {
            id: ExpenseId(result.last_insert_rowid()),
            owner: new_expense.owner,
            amount: new_expense.amount,
            currency: new_expense.currency,
            category: new_expense.category,
            created_at: new_expense.created_at,
        })
    }

    async fn find_by_id(&self, id: ExpenseId) -> Result<Option<Expense>, ExpenseError> {
        let row = sqlx::query_as::<_, ExpenseRow>(
            "SELECT id, user_id, amount, currency, category, created_at \
             FROM expenses WHERE id = ?1",
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| ExpenseError::DatabaseError(e.to_string()))?;

        row.map(ExpenseRow::into_expense).transpose()
    }

    async fn list_by_owner(
        &self,
        owner: Identity,
        page: Page,
    ) -> Result<Vec<Expense>, ExpenseError> {
        let rows = sqlx::query_as::<_, ExpenseRow>(
            "SELECT id, user_id, amount, currency, category, created_at \
             FROM expenses WHERE user_id = ?1 ORDER BY id LIMIT ?2 OFFSET ?3",
        )
        .bind(owner.as_i64())
        .bind(page.limit)
        .bind(page.skip)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| ExpenseError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(ExpenseRow::into_expense).collect()
    }

    async fn update(&self, expense: Expense) -> Result<Expense, ExpenseError> {
        sqlx::query("UPDATE expenses SET amount = ?1, currency = ?2, category = ?3 WHERE id = ?4")
            .bind(expense.amount.as_f64())
            .bind(expense.currency.as_str())
            .bind(expense.category.as_str())
            .bind(expense.id.0)
            .execute(&self.pool)
            .await
            .map_err(|e| ExpenseError::DatabaseError(e.to_string()))?;

        Ok(expense)
    }

    async fn delete(&self, id: ExpenseId) -> Result<(), ExpenseError> {
        sqlx::query("DELETE FROM expenses WHERE id = ?1")
            .bind(id.0)
            .execute(&self.pool)
            .await
            .map_err(|e| ExpenseError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
