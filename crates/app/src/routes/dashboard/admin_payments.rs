use dioxus::prelude::*;
use shared_types::AppError;
use shared_ui::{
    DataTable, DataTableBody, DataTableCell, DataTableColumn, DataTableEmpty, DataTableHeader,
    DataTableRow, PageHeader, PageSubtitle, PageTitle, Skeleton,
};

use crate::auth::use_session_expiry;
use crate::format_helpers::{format_amount, format_datetime};
use crate::routes::Route;

#[component]
pub fn AdminPayments() -> Element {
    let data = use_resource(move || async move { server::api::list_payments().await });
    use_session_expiry(data);

    rsx! {
        PageHeader {
            PageTitle { "Payments" }
            PageSubtitle { "Issue boosts and premium subscriptions" }
        }

        match &*data.read() {
            Some(Ok(payments)) => rsx! {
                DataTable {
                    DataTableHeader {
                        DataTableColumn { "Date" }
                        DataTableColumn { "User" }
                        DataTableColumn { "Purpose" }
                        DataTableColumn { "Amount" }
                        DataTableColumn { "Transaction" }
                        DataTableColumn { "Issue" }
                    }
                    DataTableBody {
                        if payments.is_empty() {
                            DataTableEmpty { colspan: 6, message: "No payments yet" }
                        }
                        for payment in payments.iter() {
                            DataTableRow { key: "{payment.id}",
                                DataTableCell { "{format_datetime(payment.date.as_ref())}" }
                                DataTableCell {
                                    div { class: "table-person",
                                        span { "{payment.user.name}" }
                                        span { class: "table-muted", "{payment.user.email}" }
                                    }
                                }
                                DataTableCell { "{payment.purpose.label()}" }
                                DataTableCell { "{format_amount(payment.amount)}" }
                                DataTableCell { code { "{payment.transaction_id}" } }
                                DataTableCell {
                                    match payment.issue_id.clone() {
                                        Some(id) => rsx! {
                                            Link { to: Route::IssueDetail { id }, "View" }
                                        },
                                        None => rsx! { "-" },
                                    }
                                }
                            }
                        }
                    }
                }
            },
            Some(Err(e)) => rsx! {
                p { class: "empty-state error", "{AppError::friendly_message(&e.to_string())}" }
            },
            None => rsx! {
                Skeleton { style: "height: 12rem" }
            },
        }
    }
}
