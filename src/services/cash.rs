//! Cash account service
//!
//! Accounts hold a single currency; every transaction inherits it. The
//! balance is the opening balance plus income minus expense.

use chrono::Utc;

use super::{insert, invalid, remove, replace};
use crate::error::{KasaError, KasaResult};
use crate::models::{CashAccount, CashAccountId, CashTransaction, CashTransactionId, Money};
use crate::storage::Storage;

pub struct CashService<'a> {
    storage: &'a Storage,
}

/// An account with its computed balance
#[derive(Debug, Clone)]
pub struct CashAccountSummary {
    pub account: CashAccount,
    pub balance: Money,
    pub transaction_count: usize,
}

impl<'a> CashService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    pub fn create_account(&self, account: CashAccount) -> KasaResult<CashAccount> {
        account.validate().map_err(invalid)?;

        let name = account.name.trim().to_lowercase();
        if !self
            .storage
            .cash_accounts
            .filter(|a| a.name.trim().to_lowercase() == name)?
            .is_empty()
        {
            return Err(KasaError::duplicate("Cash account", account.name.trim()));
        }

        insert(self.storage, &self.storage.cash_accounts, account)
    }

    pub fn update_account(&self, mut account: CashAccount) -> KasaResult<CashAccount> {
        account.updated_at = Utc::now();
        account.validate().map_err(invalid)?;
        replace(self.storage, &self.storage.cash_accounts, account)
    }

    pub fn archive_account(&self, id: CashAccountId) -> KasaResult<CashAccount> {
        let mut account = self.get_account(id)?;
        account.archive();
        replace(self.storage, &self.storage.cash_accounts, account)
    }

    /// Delete an account that has no transactions
    pub fn delete_account(&self, id: CashAccountId) -> KasaResult<CashAccount> {
        if !self.transactions(Some(id))?.is_empty() {
            return Err(KasaError::Validation(
                "Cash account has transactions; archive it instead".into(),
            ));
        }
        remove(self.storage, &self.storage.cash_accounts, id)
    }

    pub fn get_account(&self, id: CashAccountId) -> KasaResult<CashAccount> {
        self.storage
            .cash_accounts
            .get(id)?
            .ok_or_else(|| KasaError::not_found("Cash account", id.to_string()))
    }

    /// Find by id or name
    pub fn find_account(&self, identifier: &str) -> KasaResult<CashAccount> {
        self.storage.cash_accounts.resolve(identifier)
    }

    pub fn list_accounts(&self, include_archived: bool) -> KasaResult<Vec<CashAccount>> {
        self.storage
            .cash_accounts
            .filter(|a| include_archived || !a.archived)
    }

    /// Record a transaction; amount and currency must fit the account
    pub fn add_transaction(&self, mut txn: CashTransaction) -> KasaResult<CashTransaction> {
        txn.validate().map_err(invalid)?;

        let account = self.get_account(txn.account_id)?;
        if account.archived {
            return Err(KasaError::Validation(format!(
                "Cash account '{}' is archived",
                account.name
            )));
        }
        txn.currency = account.currency;

        insert(self.storage, &self.storage.cash_transactions, txn)
    }

    pub fn update_transaction(&self, txn: CashTransaction) -> KasaResult<CashTransaction> {
        txn.validate().map_err(invalid)?;
        let account = self.get_account(txn.account_id)?;
        if txn.currency != account.currency {
            return Err(KasaError::Validation(format!(
                "Transaction currency {} does not match account currency {}",
                txn.currency, account.currency
            )));
        }
        replace(self.storage, &self.storage.cash_transactions, txn)
    }

    pub fn delete_transaction(&self, id: CashTransactionId) -> KasaResult<CashTransaction> {
        remove(self.storage, &self.storage.cash_transactions, id)
    }

    pub fn find_transaction(&self, identifier: &str) -> KasaResult<CashTransaction> {
        self.storage.cash_transactions.resolve(identifier)
    }

    /// Transactions in date order, optionally for one account
    pub fn transactions(&self, account: Option<CashAccountId>) -> KasaResult<Vec<CashTransaction>> {
        self.storage
            .cash_transactions
            .filter(|t| account.map_or(true, |id| t.account_id == id))
    }

    /// Opening balance plus income minus expense
    pub fn balance(&self, id: CashAccountId) -> KasaResult<Money> {
        Ok(self.summary(self.get_account(id)?)?.balance)
    }

    pub fn summary(&self, account: CashAccount) -> KasaResult<CashAccountSummary> {
        let transactions = self.transactions(Some(account.id))?;
        let balance = account.opening_balance
            + transactions.iter().map(|t| t.signed_amount()).sum::<Money>();

        Ok(CashAccountSummary {
            account,
            balance,
            transaction_count: transactions.len(),
        })
    }

    pub fn list_with_balances(&self, include_archived: bool) -> KasaResult<Vec<CashAccountSummary>> {
        self.list_accounts(include_archived)?
            .into_iter()
            .map(|account| self.summary(account))
            .collect()
    }
}
