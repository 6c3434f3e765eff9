//! User actions: opening forms, submitting mutations, confirmations.
//!
//! Every server write goes through the view's `Mutation`, which owns the
//! invalidation set for its resource. The UI awaits mutations inline, so the
//! at-most-one-in-flight guard is a backstop rather than a scheduler.

use crate::forms::{ActiveForm, FormKind, FormState};
use crate::nav::View;
use crate::notifications::NotificationLevel;
use crate::state::{parse_date_field, App, Confirm, Modal};
use traceline_api::types::*;
use traceline_query::MutationError;

impl App {
    // ------------------------------------------------------------------------
    // Login / logout
    // ------------------------------------------------------------------------

    pub async fn submit_login(&mut self) {
        let username = self.login_form.value("username").to_string();
        let password = self.login_form.value("password").to_string();
        if username.is_empty() || password.is_empty() {
            self.notify(NotificationLevel::Warning, "Username and password are required.");
            return;
        }
        match self.session.login(&username, &password).await {
            Ok(user) => {
                self.notify(
                    NotificationLevel::Success,
                    format!("Signed in as {}.", user.username),
                );
                self.set_view(View::Dashboard);
            }
            Err(err) => {
                self.notify(NotificationLevel::Error, format!("Login failed: {}", err));
            }
        }
    }

    pub async fn logout(&mut self) {
        if let Err(err) = self.session.logout().await {
            self.notify(NotificationLevel::Error, format!("Logout failed: {}", err));
            return;
        }
        self.enter_login("Signed out.");
    }

    // ------------------------------------------------------------------------
    // Forms
    // ------------------------------------------------------------------------

    /// Open the create form for the active view.
    pub fn open_create_form(&mut self) {
        let form = match self.active_view {
            View::Documents => Some(ActiveForm {
                kind: FormKind::CreateDocument,
                state: FormState::new(
                    "New document",
                    &["title", "description", "document_type"],
                ),
            }),
            View::Nonconformances => Some(ActiveForm {
                kind: FormKind::CreateNonconformance,
                state: FormState::new(
                    "New nonconformance",
                    &[
                        "title",
                        "description",
                        "severity",
                        "source",
                        "discovered_date",
                    ],
                ),
            }),
            View::Capas => Some(ActiveForm {
                kind: FormKind::CreateCapa,
                state: FormState::new(
                    "New CAPA",
                    &["title", "capa_type", "description", "priority", "owner_id", "due_date"],
                ),
            }),
            View::Audits => Some(ActiveForm {
                kind: FormKind::CreateAudit,
                state: FormState::new(
                    "New audit",
                    &["title", "audit_type", "scope", "start_date", "led_by"],
                ),
            }),
            View::Items => Some(ActiveForm {
                kind: FormKind::CreateItem,
                state: FormState::new(
                    "New item",
                    &["item_code", "description", "item_type", "unit_of_measure"],
                ),
            }),
            View::WorkOrders => Some(ActiveForm {
                kind: FormKind::CreateWorkOrder,
                state: FormState::new(
                    "New work order",
                    &["item_id", "quantity_ordered", "priority", "lot_number"],
                ),
            }),
            View::Inventory => Some(ActiveForm {
                kind: FormKind::CreateInventoryRecord,
                state: FormState::new(
                    "New inventory record",
                    &["item_id", "warehouse_location", "bin_location", "quantity_on_hand"],
                ),
            }),
            View::Users => Some(ActiveForm {
                kind: FormKind::CreateUser,
                state: FormState::new(
                    "New user",
                    &["email", "username", "password", "role_id", "department"],
                ),
            }),
            _ => None,
        };
        match form {
            Some(form) => self.form = Some(form),
            None => self.notify(NotificationLevel::Info, "No create form for this view."),
        }
    }

    /// Open the edit form for the selected record, where the view has one.
    pub fn open_edit_form(&mut self) {
        match self.active_view {
            View::Documents => {
                let Some(doc) = self.documents.selected_row() else {
                    self.notify(NotificationLevel::Info, "Nothing selected.");
                    return;
                };
                let state = FormState::new("Edit document", &["title", "description", "status"])
                    .with_value("title", doc.title.clone())
                    .with_value("description", doc.description.clone().unwrap_or_default())
                    .with_value("status", doc.status.clone());
                self.form = Some(ActiveForm {
                    kind: FormKind::EditDocument { id: doc.id.clone() },
                    state,
                });
            }
            _ => self.notify(NotificationLevel::Info, "No edit form for this view."),
        }
    }

    /// Submit the open form: build the typed request, run the mutation,
    /// close the form on success.
    pub async fn submit_form(&mut self) {
        let Some(form) = self.form.take() else {
            return;
        };
        let outcome = self.run_form(&form).await;
        match outcome {
            Ok(message) => self.notify(NotificationLevel::Success, message),
            Err(FormError::Invalid(reason)) => {
                self.notify(NotificationLevel::Warning, reason);
                // Leave the form open for correction.
                self.form = Some(form);
            }
            Err(FormError::Mutation(err)) => {
                self.notify(NotificationLevel::Error, format!("Request failed: {}", err));
                self.form = Some(form);
            }
        }
    }

    async fn run_form(&mut self, form: &ActiveForm) -> Result<String, FormError> {
        let fields = &form.state;
        match &form.kind {
            FormKind::CreateDocument => {
                let req = CreateDocumentRequest {
                    title: required(fields.value("title"), "title")?,
                    description: fields.opt_value("description"),
                    document_type: required(fields.value("document_type"), "document_type")?,
                };
                let rest = self.rest.clone();
                self.documents
                    .mutation
                    .run(|| async move { rest.create_document(&req).await })
                    .await?;
                Ok("Document created.".to_string())
            }
            FormKind::EditDocument { id } => {
                let req = UpdateDocumentRequest {
                    title: fields.opt_value("title"),
                    description: fields.opt_value("description"),
                    status: fields.opt_value("status"),
                };
                let rest = self.rest.clone();
                let id = id.clone();
                self.documents
                    .mutation
                    .run(|| async move { rest.update_document(&id, &req).await })
                    .await?;
                Ok("Document updated.".to_string())
            }
            FormKind::CreateNonconformance => {
                let req = CreateNonconformanceRequest {
                    title: required(fields.value("title"), "title")?,
                    description: required(fields.value("description"), "description")?,
                    severity: fields.opt_value("severity"),
                    source: fields.opt_value("source"),
                    product_affected: None,
                    lot_number: None,
                    quantity_affected: None,
                    discovered_date: parse_date_field(fields.value("discovered_date"))
                        .map_err(FormError::Invalid)?,
                    discovered_by: None,
                };
                let rest = self.rest.clone();
                self.nonconformances
                    .mutation
                    .run(|| async move { rest.create_nonconformance(&req).await })
                    .await?;
                Ok("Nonconformance raised.".to_string())
            }
            FormKind::CreateCapa => {
                let due_date = match fields.opt_value("due_date") {
                    Some(value) => Some(parse_date_field(&value).map_err(FormError::Invalid)?),
                    None => None,
                };
                let req = CreateCapaRequest {
                    title: required(fields.value("title"), "title")?,
                    capa_type: fields.opt_value("capa_type"),
                    description: fields.opt_value("description"),
                    nc_id: None,
                    due_date,
                    priority: fields
                        .opt_value("priority")
                        .unwrap_or_else(|| "Medium".to_string()),
                    owner_id: required(fields.value("owner_id"), "owner_id")?,
                };
                let rest = self.rest.clone();
                self.capas
                    .mutation
                    .run(|| async move { rest.create_capa(&req).await })
                    .await?;
                Ok("CAPA opened.".to_string())
            }
            FormKind::CreateAudit => {
                let req = CreateAuditRequest {
                    title: required(fields.value("title"), "title")?,
                    audit_type: fields.opt_value("audit_type"),
                    scope: fields.opt_value("scope"),
                    start_date: parse_date_field(fields.value("start_date"))
                        .map_err(FormError::Invalid)?,
                    end_date: None,
                    auditee_department: None,
                    led_by: required(fields.value("led_by"), "led_by")?,
                };
                let rest = self.rest.clone();
                self.audits
                    .mutation
                    .run(|| async move { rest.create_audit(&req).await })
                    .await?;
                Ok("Audit scheduled.".to_string())
            }
            FormKind::CreateItem => {
                let req = CreateItemRequest {
                    item_code: required(fields.value("item_code"), "item_code")?,
                    description: required(fields.value("description"), "description")?,
                    item_type: fields.opt_value("item_type"),
                    unit_of_measure: fields
                        .opt_value("unit_of_measure")
                        .unwrap_or_else(|| "EA".to_string()),
                    device_class: None,
                    udi: None,
                };
                let rest = self.rest.clone();
                self.items
                    .mutation
                    .run(|| async move { rest.create_item(&req).await })
                    .await?;
                Ok("Item created.".to_string())
            }
            FormKind::CreateWorkOrder => {
                let req = CreateWorkOrderRequest {
                    item_id: required(fields.value("item_id"), "item_id")?,
                    quantity_ordered: parse_quantity(fields.value("quantity_ordered"))?,
                    priority: fields
                        .opt_value("priority")
                        .unwrap_or_else(|| "Normal".to_string()),
                    start_date: None,
                    scheduled_completion: None,
                    lot_number: fields.opt_value("lot_number"),
                    notes: None,
                };
                let rest = self.rest.clone();
                self.work_orders
                    .mutation
                    .run(|| async move { rest.create_work_order(&req).await })
                    .await?;
                Ok("Work order created.".to_string())
            }
            FormKind::CompleteWorkOrder { id } => {
                let quantity = parse_quantity(fields.value("quantity_completed"))?;
                let rest = self.rest.clone();
                let id = id.clone();
                self.work_orders
                    .mutation
                    .run(|| async move { rest.complete_work_order(&id, quantity).await })
                    .await?;
                Ok("Work order completed.".to_string())
            }
            FormKind::CreateInventoryRecord => {
                let req = CreateInventoryRequest {
                    item_id: required(fields.value("item_id"), "item_id")?,
                    warehouse_location: required(
                        fields.value("warehouse_location"),
                        "warehouse_location",
                    )?,
                    bin_location: fields.opt_value("bin_location"),
                    quantity_on_hand: parse_quantity(fields.value("quantity_on_hand"))?,
                };
                let rest = self.rest.clone();
                self.inventory
                    .mutation
                    .run(|| async move { rest.create_inventory_record(&req).await })
                    .await?;
                Ok("Inventory record created.".to_string())
            }
            FormKind::AdjustInventory { id } => {
                let quantity = parse_signed_quantity(fields.value("quantity_adjustment"))?;
                let reason = required(fields.value("reason"), "reason")?;
                let rest = self.rest.clone();
                let id = id.clone();
                self.inventory
                    .mutation
                    .run(|| async move { rest.adjust_inventory(&id, quantity, &reason).await })
                    .await?;
                Ok("Inventory adjusted.".to_string())
            }
            FormKind::CreateUser => {
                let req = CreateUserRequest {
                    email: required(fields.value("email"), "email")?,
                    username: required(fields.value("username"), "username")?,
                    first_name: None,
                    last_name: None,
                    department: fields.opt_value("department"),
                    password: required(fields.value("password"), "password")?,
                    role_id: required(fields.value("role_id"), "role_id")?,
                };
                let rest = self.rest.clone();
                self.users
                    .mutation
                    .run(|| async move { rest.create_user(&req).await })
                    .await?;
                Ok("User created.".to_string())
            }
        }
    }

    // ------------------------------------------------------------------------
    // Deletes (with confirmation)
    // ------------------------------------------------------------------------

    /// Ask for confirmation before deleting the selected record.
    pub fn request_delete(&mut self) {
        let confirm = match self.active_view {
            View::Documents => self.documents.selected_row().map(|d| Confirm::DeleteDocument {
                id: d.id.clone(),
                label: d.doc_number.clone(),
            }),
            View::Nonconformances => {
                self.nonconformances
                    .selected_row()
                    .map(|nc| Confirm::DeleteNonconformance {
                        id: nc.id.clone(),
                        label: nc.nc_number.clone(),
                    })
            }
            View::Audits => self.audits.selected_row().map(|a| Confirm::DeleteAudit {
                id: a.id.clone(),
                label: a.audit_number.clone(),
            }),
            View::Items => self.items.selected_row().map(|i| Confirm::DeleteItem {
                id: i.id.clone(),
                label: i.item_code.clone(),
            }),
            View::WorkOrders => self.work_orders.selected_row().map(|wo| Confirm::DeleteWorkOrder {
                id: wo.id.clone(),
                label: wo.work_order_number.clone(),
            }),
            View::Capas => {
                self.notify(
                    NotificationLevel::Info,
                    "CAPAs are closed, never deleted.",
                );
                return;
            }
            _ => {
                self.notify(NotificationLevel::Info, "Nothing to delete here.");
                return;
            }
        };
        match confirm {
            Some(confirm) => self.confirm = Some(confirm),
            None => self.notify(NotificationLevel::Info, "Nothing selected."),
        }
    }

    /// Execute a confirmed delete.
    pub async fn execute_confirmed(&mut self) {
        let Some(confirm) = self.confirm.take() else {
            return;
        };
        let rest = self.rest.clone();
        let result = match &confirm {
            Confirm::DeleteDocument { id, .. } => {
                let id = id.clone();
                self.documents
                    .mutation
                    .run(|| async move { rest.delete_document(&id).await })
                    .await
            }
            Confirm::DeleteNonconformance { id, .. } => {
                let id = id.clone();
                self.nonconformances
                    .mutation
                    .run(|| async move { rest.delete_nonconformance(&id).await })
                    .await
            }
            Confirm::DeleteAudit { id, .. } => {
                let id = id.clone();
                self.audits
                    .mutation
                    .run(|| async move { rest.delete_audit(&id).await })
                    .await
            }
            Confirm::DeleteItem { id, .. } => {
                let id = id.clone();
                self.items
                    .mutation
                    .run(|| async move { rest.delete_item(&id).await })
                    .await
            }
            Confirm::DeleteWorkOrder { id, .. } => {
                let id = id.clone();
                self.work_orders
                    .mutation
                    .run(|| async move { rest.delete_work_order(&id).await })
                    .await
            }
        };
        match result {
            Ok(_) => self.notify(NotificationLevel::Success, "Deleted."),
            Err(err) => self.notify(NotificationLevel::Error, format!("Delete failed: {}", err)),
        }
    }

    // ------------------------------------------------------------------------
    // Context actions
    // ------------------------------------------------------------------------

    /// Primary context action: approve a document, release a work order,
    /// adjust inventory.
    pub async fn primary_action(&mut self) {
        match self.active_view {
            View::Documents => {
                let Some(id) = self.documents.selected_id() else {
                    self.notify(NotificationLevel::Info, "Nothing selected.");
                    return;
                };
                let rest = self.rest.clone();
                let result = self
                    .documents
                    .mutation
                    .run(|| async move { rest.approve_document(&id).await })
                    .await;
                self.report("Document approved.", result);
            }
            View::WorkOrders => {
                let Some(id) = self.work_orders.selected_id() else {
                    self.notify(NotificationLevel::Info, "Nothing selected.");
                    return;
                };
                let rest = self.rest.clone();
                let result = self
                    .work_orders
                    .mutation
                    .run(|| async move { rest.release_work_order(&id).await })
                    .await;
                self.report("Work order released.", result);
            }
            View::Inventory => {
                let Some(id) = self.inventory.selected_id() else {
                    self.notify(NotificationLevel::Info, "Nothing selected.");
                    return;
                };
                self.form = Some(ActiveForm {
                    kind: FormKind::AdjustInventory { id },
                    state: FormState::new("Adjust inventory", &["quantity_adjustment", "reason"]),
                });
            }
            _ => self.notify(NotificationLevel::Info, "No action for this view."),
        }
    }

    /// Secondary context action: complete a work order.
    pub async fn secondary_action(&mut self) {
        match self.active_view {
            View::WorkOrders => {
                let Some(id) = self.work_orders.selected_id() else {
                    self.notify(NotificationLevel::Info, "Nothing selected.");
                    return;
                };
                self.form = Some(ActiveForm {
                    kind: FormKind::CompleteWorkOrder { id },
                    state: FormState::new("Complete work order", &["quantity_completed"]),
                });
            }
            _ => self.notify(NotificationLevel::Info, "No action for this view."),
        }
    }

    pub fn open_help(&mut self) {
        self.modal = Some(Modal {
            title: "Keybindings".to_string(),
            message: "j/k move - Tab/digits switch views - h/l cycle filter - n new - e edit - \
                      d delete - a action - c complete - r refresh - Ctrl-L logout - q quit"
                .to_string(),
        });
    }

    fn report<T>(&mut self, success: &str, result: Result<T, MutationError>) {
        match result {
            Ok(_) => self.notify(NotificationLevel::Success, success),
            Err(err) => self.notify(NotificationLevel::Error, format!("Request failed: {}", err)),
        }
    }
}

enum FormError {
    Invalid(String),
    Mutation(MutationError),
}

impl From<MutationError> for FormError {
    fn from(err: MutationError) -> Self {
        FormError::Mutation(err)
    }
}

fn required(value: &str, field: &str) -> Result<String, FormError> {
    if value.is_empty() {
        Err(FormError::Invalid(format!("{} is required", field)))
    } else {
        Ok(value.to_string())
    }
}

fn parse_quantity(value: &str) -> Result<f64, FormError> {
    let quantity: f64 = value
        .parse()
        .map_err(|_| FormError::Invalid(format!("'{}' is not a number", value)))?;
    if quantity < 0.0 {
        return Err(FormError::Invalid("quantity must not be negative".to_string()));
    }
    Ok(quantity)
}

fn parse_signed_quantity(value: &str) -> Result<f64, FormError> {
    value
        .parse()
        .map_err(|_| FormError::Invalid(format!("'{}' is not a number", value)))
}
