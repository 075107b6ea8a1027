//! Invoice service

use chrono::{NaiveDate, Utc};

use super::{insert, invalid, remove, replace};
use crate::error::{KasaError, KasaResult};
use crate::models::{Invoice, InvoiceId, InvoiceKind, InvoiceStatus};
use crate::storage::Storage;

pub struct InvoiceService<'a> {
    storage: &'a Storage,
}

impl<'a> InvoiceService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Store a new invoice; numbers are unique per kind
    pub fn create(&self, invoice: Invoice) -> KasaResult<Invoice> {
        invoice.validate().map_err(invalid)?;

        let number = invoice.number.trim();
        let taken = self
            .storage
            .invoices
            .filter(|i| i.kind == invoice.kind && i.number.trim() == number)?;
        if !taken.is_empty() {
            return Err(KasaError::duplicate("Invoice", number));
        }

        insert(self.storage, &self.storage.invoices, invoice)
    }

    /// Save changes to an invoice; the total is recomputed from subtotal and VAT
    pub fn update(&self, mut invoice: Invoice) -> KasaResult<Invoice> {
        invoice.total = invoice.subtotal + invoice.subtotal.percentage(invoice.vat_rate);
        invoice.updated_at = Utc::now();
        invoice.validate().map_err(invalid)?;

        replace(self.storage, &self.storage.invoices, invoice)
    }

    pub fn delete(&self, id: InvoiceId) -> KasaResult<Invoice> {
        remove(self.storage, &self.storage.invoices, id)
    }

    pub fn get(&self, id: InvoiceId) -> KasaResult<Option<Invoice>> {
        self.storage.invoices.get(id)
    }

    /// Find by id, short id or invoice number
    pub fn find(&self, identifier: &str) -> KasaResult<Invoice> {
        self.storage.invoices.resolve(identifier)
    }

    pub fn list(&self, kind: Option<InvoiceKind>) -> KasaResult<Vec<Invoice>> {
        self.storage
            .invoices
            .filter(|i| kind.map_or(true, |k| i.kind == k))
    }

    pub fn mark_paid(&self, id: InvoiceId) -> KasaResult<Invoice> {
        let mut invoice = self
            .get(id)?
            .ok_or_else(|| KasaError::not_found("Invoice", id.to_string()))?;

        if invoice.status == InvoiceStatus::Cancelled {
            return Err(KasaError::Validation(format!(
                "Invoice {} is cancelled",
                invoice.number
            )));
        }

        invoice.mark_paid();
        replace(self.storage, &self.storage.invoices, invoice)
    }

    /// Flag unpaid invoices past due (plus grace days) as overdue; returns how many changed
    pub fn refresh_overdue(&self, as_of: NaiveDate, grace_days: u32) -> KasaResult<usize> {
        let stale = self.storage.invoices.filter(|i| {
            i.status != InvoiceStatus::Overdue && i.is_overdue(as_of, grace_days)
        })?;

        for mut invoice in stale.iter().cloned() {
            invoice.status = InvoiceStatus::Overdue;
            invoice.updated_at = Utc::now();
            replace(self.storage, &self.storage.invoices, invoice)?;
        }

        Ok(stale.len())
    }
}
