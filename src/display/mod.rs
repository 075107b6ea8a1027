//! Display formatting for terminal output
//!
//! Money with currency symbols, ledger tables and report helpers.

pub mod ledger;
pub mod money;
pub mod report;

pub use ledger::{
    format_cash_account_list, format_cash_transaction_list, format_check_list,
    format_contract_list, format_installment_list, format_invoice_list, format_payroll_list,
    format_project_list,
};
pub use money::{format_amount, format_amount_colored};
pub use report::{double_separator, format_progress_bar, separator, truncate};
