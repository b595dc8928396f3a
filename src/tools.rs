//! Tool surface for the dashboard's conversational assistant.
//!
//! Each tool is a thin JSON boundary over one store command or query:
//! arguments come in as loosely-typed JSON, get validated into a
//! [`HotelCommand`], and the outcome goes back as a [`ToolReply`] that is
//! safe to hand to a language model. Rejections are replies, never panics,
//! so a failed tool call keeps the conversation going.

use chrono::NaiveDate;
use serde::Serialize;
use serde_json::{Value, json};

use crate::command::{
    BillingAdjustment, CommandContext, DraftMessage, HotelCommand, KeyGenerationData, ViewType,
};
use crate::domain::{ChargeCategory, HousekeepingStatus, RoomStatus, RoomType, TaskPriority};
use crate::error::{ErrorKind, HotelError};
use crate::event::HotelEvent;
use crate::store::HotelStore;
use crate::view::{FolioView, RateSheet, ReservationCard, RoomBoard};

// --- Definitions ---

/// Parameter type for tool input schemas.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ParamType {
    String,
    Integer,
    Number,
    Boolean,
    Array(Box<ParamType>),
}

impl ParamType {
    fn to_json_schema(&self) -> Value {
        match self {
            ParamType::String => json!({"type": "string"}),
            ParamType::Integer => json!({"type": "integer"}),
            ParamType::Number => json!({"type": "number"}),
            ParamType::Boolean => json!({"type": "boolean"}),
            ParamType::Array(inner) => json!({
                "type": "array",
                "items": inner.to_json_schema()
            }),
        }
    }
}

/// A single named tool parameter.
#[derive(Debug, Clone, Serialize)]
pub struct ToolParam {
    pub name: String,
    pub param_type: ParamType,
    pub description: Option<String>,
    pub required: bool,
    pub enum_values: Option<Vec<String>>,
}

impl ToolParam {
    pub fn new(name: &str, param_type: ParamType) -> Self {
        Self {
            name: name.to_owned(),
            param_type,
            description: None,
            required: false,
            enum_values: None,
        }
    }

    pub fn desc(mut self, d: &str) -> Self {
        self.description = Some(d.to_owned());
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn enum_vals(mut self, vals: &[&str]) -> Self {
        self.enum_values = Some(vals.iter().map(|s| (*s).to_owned()).collect());
        self
    }
}

/// One tool the assistant can call.
#[derive(Debug, Clone, Serialize)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    pub params: Vec<ToolParam>,
}

impl ToolDefinition {
    fn new(name: &str, description: &str, params: Vec<ToolParam>) -> Self {
        Self {
            name: name.to_owned(),
            description: description.to_owned(),
            params,
        }
    }

    /// Build the JSON Schema for this tool's input object.
    pub fn input_schema(&self) -> Value {
        let mut properties = serde_json::Map::new();
        let mut required = Vec::new();
        for param in &self.params {
            let mut schema = param.param_type.to_json_schema();
            if let Some(desc) = &param.description {
                schema["description"] = json!(desc);
            }
            if let Some(enum_vals) = &param.enum_values {
                schema["enum"] = json!(enum_vals);
            }
            properties.insert(param.name.clone(), schema);
            if param.required {
                required.push(param.name.clone());
            }
        }
        json!({
            "type": "object",
            "properties": properties,
            "required": required,
        })
    }
}

const VIEWS: &[&str] = &[
    "Dashboard",
    "Reservations",
    "Rooms",
    "Housekeeping",
    "Billing",
    "Rates",
];
const ROOM_TYPES: &[&str] = &["Queen", "King", "Suite"];
const SETTABLE_STATUSES: &[&str] = &["Available", "Dirty", "Clean", "OutOfOrder"];
const CATEGORIES: &[&str] = &["Room", "Food", "Amenity", "Service", "Tax"];
const TASK_STATUSES: &[&str] = &["Dirty", "InProgress", "Ready"];
const TASK_PRIORITIES: &[&str] = &["Normal", "Rush"];

/// All tools the assistant may call, in display order.
pub fn definitions() -> Vec<ToolDefinition> {
    vec![
        ToolDefinition::new(
            "navigate_to",
            "Switch the dashboard to a different view. Clears any highlights.",
            vec![
                ToolParam::new("view", ParamType::String)
                    .desc("The view to show")
                    .enum_vals(VIEWS)
                    .required(),
            ],
        ),
        ToolDefinition::new(
            "select_reservation",
            "Select a reservation, switching to a reservation-detail view if needed.",
            vec![ToolParam::new("reservation_id", ParamType::String).required()],
        ),
        ToolDefinition::new(
            "select_room",
            "Select a room on the room board.",
            vec![ToolParam::new("room_number", ParamType::String).required()],
        ),
        ToolDefinition::new(
            "highlight_reservations",
            "Highlight reservations in the current view, replacing earlier highlights.",
            vec![
                ToolParam::new("reservation_ids", ParamType::Array(Box::new(ParamType::String)))
                    .required(),
            ],
        ),
        ToolDefinition::new(
            "highlight_rooms",
            "Highlight rooms in the current view, replacing earlier highlights.",
            vec![
                ToolParam::new("room_numbers", ParamType::Array(Box::new(ParamType::String)))
                    .required(),
            ],
        ),
        ToolDefinition::new(
            "start_check_in",
            "Open the check-in workflow for a confirmed reservation.",
            vec![ToolParam::new("reservation_id", ParamType::String).required()],
        ),
        ToolDefinition::new(
            "stage_room_assignment",
            "Stage a room for a reservation without committing it. The room must be \
             Available or Clean, unless it is the reservation's own room.",
            vec![
                ToolParam::new("reservation_id", ParamType::String).required(),
                ToolParam::new("room_number", ParamType::String).required(),
            ],
        ),
        ToolDefinition::new(
            "complete_check_in",
            "Commit the open check-in: the reservation becomes CheckedIn, the room \
             Occupied, and staged billing edits for it are applied.",
            vec![],
        ),
        ToolDefinition::new(
            "cancel_check_in",
            "Abandon the open check-in and discard its staged room and billing edits.",
            vec![],
        ),
        ToolDefinition::new(
            "add_billing_item",
            "Stage a new charge on a reservation's folio. Applied when the check-in \
             commits.",
            vec![
                ToolParam::new("reservation_id", ParamType::String).required(),
                ToolParam::new("category", ParamType::String)
                    .enum_vals(CATEGORIES)
                    .required(),
                ToolParam::new("description", ParamType::String).required(),
                ToolParam::new("amount", ParamType::Number)
                    .desc("Charge amount in dollars, e.g. 35.00")
                    .required(),
            ],
        ),
        ToolDefinition::new(
            "remove_billing_item",
            "Stage removal of a committed folio line.",
            vec![
                ToolParam::new("reservation_id", ParamType::String).required(),
                ToolParam::new("item_id", ParamType::String).required(),
            ],
        ),
        ToolDefinition::new(
            "discount_billing_item",
            "Stage a percentage discount on a committed folio line. 100 comps the line.",
            vec![
                ToolParam::new("reservation_id", ParamType::String).required(),
                ToolParam::new("item_id", ParamType::String).required(),
                ToolParam::new("percent", ParamType::Integer)
                    .desc("Discount percentage, 1-100")
                    .required(),
            ],
        ),
        ToolDefinition::new(
            "stage_room_status",
            "Stage a housekeeping status change for one room. Occupied cannot be set \
             by hand.",
            vec![
                ToolParam::new("room_number", ParamType::String).required(),
                ToolParam::new("status", ParamType::String)
                    .enum_vals(SETTABLE_STATUSES)
                    .required(),
            ],
        ),
        ToolDefinition::new(
            "commit_room_status",
            "Commit the staged room status change.",
            vec![],
        ),
        ToolDefinition::new(
            "cancel_room_status",
            "Discard the staged room status change.",
            vec![],
        ),
        ToolDefinition::new(
            "stage_rate_change",
            "Stage a nightly rate for a room type on a date without publishing it.",
            vec![
                ToolParam::new("room_type", ParamType::String)
                    .enum_vals(ROOM_TYPES)
                    .required(),
                ToolParam::new("date", ParamType::String)
                    .desc("Date in YYYY-MM-DD form")
                    .required(),
                ToolParam::new("rate", ParamType::Number)
                    .desc("Nightly rate in dollars, e.g. 189.00")
                    .required(),
            ],
        ),
        ToolDefinition::new(
            "commit_rate_change",
            "Publish the staged rate change to the rate table.",
            vec![],
        ),
        ToolDefinition::new(
            "cancel_rate_change",
            "Discard the staged rate change.",
            vec![],
        ),
        ToolDefinition::new(
            "update_housekeeping_task",
            "Update fields on a housekeeping task. Omitted fields are left alone.",
            vec![
                ToolParam::new("task_id", ParamType::String).required(),
                ToolParam::new("status", ParamType::String).enum_vals(TASK_STATUSES),
                ToolParam::new("priority", ParamType::String).enum_vals(TASK_PRIORITIES),
                ToolParam::new("assigned_to", ParamType::String),
                ToolParam::new("notes", ParamType::String),
            ],
        ),
        ToolDefinition::new(
            "set_draft_message",
            "Put a draft guest message in the composer for the clerk to review.",
            vec![
                ToolParam::new("recipient", ParamType::String).required(),
                ToolParam::new("body", ParamType::String).required(),
            ],
        ),
        ToolDefinition::new("clear_draft_message", "Clear the message composer.", vec![]),
        ToolDefinition::new(
            "set_key_generation",
            "Fill the key-card panel for a reservation and room.",
            vec![
                ToolParam::new("reservation_id", ParamType::String).required(),
                ToolParam::new("room_number", ParamType::String).required(),
                ToolParam::new("count", ParamType::Integer)
                    .desc("Number of key cards, at least 1")
                    .required(),
            ],
        ),
        ToolDefinition::new("clear_key_generation", "Clear the key-card panel.", vec![]),
        ToolDefinition::new(
            "reset_state",
            "Restore the whole demo to its seeded snapshot.",
            vec![],
        ),
        ToolDefinition::new(
            "get_available_rooms",
            "List rooms that can take an arriving guest, optionally by room type.",
            vec![ToolParam::new("room_type", ParamType::String).enum_vals(ROOM_TYPES)],
        ),
        ToolDefinition::new(
            "get_todays_arrivals",
            "List confirmed reservations arriving today.",
            vec![],
        ),
        ToolDefinition::new(
            "get_todays_departures",
            "List in-house reservations departing today.",
            vec![],
        ),
        ToolDefinition::new(
            "get_reservation",
            "Fetch one reservation with its guest and any staged room assignment.",
            vec![ToolParam::new("reservation_id", ParamType::String).required()],
        ),
        ToolDefinition::new(
            "get_guest",
            "Fetch a guest profile with preferences and stay history.",
            vec![ToolParam::new("guest_id", ParamType::String).required()],
        ),
        ToolDefinition::new(
            "get_folio",
            "Fetch a reservation's folio with staged edits overlaid and both totals.",
            vec![ToolParam::new("reservation_id", ParamType::String).required()],
        ),
        ToolDefinition::new(
            "get_room_board",
            "Fetch the room grid with any staged status overlaid.",
            vec![],
        ),
        ToolDefinition::new(
            "get_rate_sheet",
            "Fetch one room type's rate calendar with any staged change overlaid.",
            vec![
                ToolParam::new("room_type", ParamType::String)
                    .enum_vals(ROOM_TYPES)
                    .required(),
            ],
        ),
    ]
}

// --- Replies ---

/// What a tool call hands back to the conversation.
#[derive(Debug, Clone, Serialize)]
pub struct ToolReply {
    pub message: String,
    pub is_error: bool,
    /// Present on store rejections and malformed input.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_kind: Option<ErrorKind>,
    /// Structured payload for query tools.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl ToolReply {
    fn ok(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            is_error: false,
            error_kind: None,
            data: None,
        }
    }

    fn invalid(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            is_error: true,
            error_kind: Some(ErrorKind::InvalidArgument),
            data: None,
        }
    }

    fn rejected(err: HotelError) -> Self {
        Self {
            message: err.to_string(),
            is_error: true,
            error_kind: Some(err.kind()),
            data: None,
        }
    }
}

fn json_reply(message: impl Into<String>, value: impl Serialize) -> ToolReply {
    match serde_json::to_value(value) {
        Ok(data) => ToolReply {
            message: message.into(),
            is_error: false,
            error_kind: None,
            data: Some(data),
        },
        Err(e) => ToolReply::invalid(format!("Failed to serialize result: {e}")),
    }
}

// --- Argument extraction ---

fn str_arg<'a>(input: &'a Value, key: &str) -> Option<&'a str> {
    input.get(key).and_then(|v| v.as_str())
}

fn str_list_arg(input: &Value, key: &str) -> Option<Vec<String>> {
    input.get(key).and_then(|v| v.as_array()).map(|arr| {
        arr.iter()
            .filter_map(|v| v.as_str())
            .map(str::to_owned)
            .collect()
    })
}

fn enum_arg<T: serde::de::DeserializeOwned>(input: &Value, key: &str) -> Option<T> {
    input
        .get(key)
        .cloned()
        .and_then(|v| serde_json::from_value(v).ok())
}

fn date_arg(input: &Value, key: &str) -> Option<NaiveDate> {
    str_arg(input, key).and_then(|s| s.parse().ok())
}

/// Convert a dollar amount to integer cents, rounding to the nearest cent.
fn dollars_to_cents(amount: f64) -> Option<u64> {
    if !amount.is_finite() || amount < 0.0 {
        return None;
    }
    Some((amount * 100.0).round() as u64)
}

fn missing(key: &str) -> ToolReply {
    ToolReply::invalid(format!("Missing or malformed '{key}' parameter"))
}

// --- Execution ---

fn assistant_ctx() -> CommandContext {
    CommandContext::default().with_actor("assistant")
}

fn dispatch(store: &mut HotelStore, cmd: HotelCommand, done: String) -> ToolReply {
    match store.dispatch(cmd, assistant_ctx()) {
        Ok(events) if events.is_empty() => ToolReply::ok("Nothing to do; state unchanged"),
        Ok(_) => ToolReply::ok(done),
        Err(err) => ToolReply::rejected(err),
    }
}

/// Execute one tool call against the store.
///
/// Unknown tool names and malformed inputs come back as invalid-argument
/// replies; store rejections keep their own error kind.
pub fn handle_tool(store: &mut HotelStore, name: &str, input: &Value) -> ToolReply {
    match name {
        "navigate_to" => {
            let Some(view) = enum_arg::<ViewType>(input, "view") else {
                return missing("view");
            };
            dispatch(
                store,
                HotelCommand::NavigateTo { view },
                format!("Now showing the {} view", view.as_str()),
            )
        }
        "select_reservation" => {
            let Some(id) = str_arg(input, "reservation_id") else {
                return missing("reservation_id");
            };
            dispatch(
                store,
                HotelCommand::SelectReservation {
                    reservation_id: id.to_owned(),
                },
                format!("Selected reservation {id}"),
            )
        }
        "select_room" => {
            let Some(number) = str_arg(input, "room_number") else {
                return missing("room_number");
            };
            dispatch(
                store,
                HotelCommand::SelectRoom {
                    room_number: number.to_owned(),
                },
                format!("Selected room {number}"),
            )
        }
        "highlight_reservations" => {
            let Some(ids) = str_list_arg(input, "reservation_ids") else {
                return missing("reservation_ids");
            };
            let count = ids.len();
            dispatch(
                store,
                HotelCommand::HighlightReservations {
                    reservation_ids: ids,
                },
                format!("Highlighted {count} reservation(s)"),
            )
        }
        "highlight_rooms" => {
            let Some(numbers) = str_list_arg(input, "room_numbers") else {
                return missing("room_numbers");
            };
            let count = numbers.len();
            dispatch(
                store,
                HotelCommand::HighlightRooms {
                    room_numbers: numbers,
                },
                format!("Highlighted {count} room(s)"),
            )
        }
        "start_check_in" => {
            let Some(id) = str_arg(input, "reservation_id") else {
                return missing("reservation_id");
            };
            dispatch(
                store,
                HotelCommand::StartCheckIn {
                    reservation_id: id.to_owned(),
                },
                format!("Check-in started for {id}"),
            )
        }
        "stage_room_assignment" => {
            let Some(id) = str_arg(input, "reservation_id") else {
                return missing("reservation_id");
            };
            let Some(room) = str_arg(input, "room_number") else {
                return missing("room_number");
            };
            dispatch(
                store,
                HotelCommand::StageRoomAssignment {
                    reservation_id: id.to_owned(),
                    new_room: room.to_owned(),
                },
                format!("Staged room {room} for {id}; complete the check-in to commit"),
            )
        }
        "complete_check_in" => match store.dispatch(HotelCommand::CompleteCheckIn, assistant_ctx())
        {
            Ok(events) => {
                let summary = events
                    .iter()
                    .find_map(|e| match e {
                        HotelEvent::CheckInCompleted {
                            reservation_id,
                            room_number,
                            ..
                        } => Some(format!("Checked {reservation_id} into room {room_number}")),
                        _ => None,
                    })
                    .unwrap_or_else(|| "Check-in completed".to_owned());
                ToolReply::ok(summary)
            }
            Err(err) => ToolReply::rejected(err),
        },
        "cancel_check_in" => dispatch(
            store,
            HotelCommand::CancelCheckIn,
            "Check-in cancelled; staged changes discarded".to_owned(),
        ),
        "add_billing_item" => {
            let Some(id) = str_arg(input, "reservation_id") else {
                return missing("reservation_id");
            };
            let Some(category) = enum_arg::<ChargeCategory>(input, "category") else {
                return missing("category");
            };
            let Some(description) = str_arg(input, "description") else {
                return missing("description");
            };
            let Some(amount) = input.get("amount").and_then(|v| v.as_f64()) else {
                return missing("amount");
            };
            let Some(amount_cents) = dollars_to_cents(amount) else {
                return ToolReply::invalid("'amount' must be a non-negative dollar value");
            };
            dispatch(
                store,
                HotelCommand::StageBillingAdjustment {
                    reservation_id: id.to_owned(),
                    adjustment: BillingAdjustment::Add {
                        category,
                        description: description.to_owned(),
                        amount_cents,
                    },
                },
                format!("Staged a ${:.2} charge on {id}", amount),
            )
        }
        "remove_billing_item" => {
            let Some(id) = str_arg(input, "reservation_id") else {
                return missing("reservation_id");
            };
            let Some(item_id) = str_arg(input, "item_id") else {
                return missing("item_id");
            };
            dispatch(
                store,
                HotelCommand::StageBillingAdjustment {
                    reservation_id: id.to_owned(),
                    adjustment: BillingAdjustment::Remove {
                        item_id: item_id.to_owned(),
                    },
                },
                format!("Staged removal of {item_id}"),
            )
        }
        "discount_billing_item" => {
            let Some(id) = str_arg(input, "reservation_id") else {
                return missing("reservation_id");
            };
            let Some(item_id) = str_arg(input, "item_id") else {
                return missing("item_id");
            };
            let Some(percent) = input
                .get("percent")
                .and_then(|v| v.as_u64())
                .and_then(|n| u8::try_from(n).ok())
            else {
                return missing("percent");
            };
            dispatch(
                store,
                HotelCommand::StageBillingAdjustment {
                    reservation_id: id.to_owned(),
                    adjustment: BillingAdjustment::Discount {
                        item_id: item_id.to_owned(),
                        percent,
                    },
                },
                format!("Staged a {percent}% discount on {item_id}"),
            )
        }
        "stage_room_status" => {
            let Some(number) = str_arg(input, "room_number") else {
                return missing("room_number");
            };
            let Some(status) = enum_arg::<RoomStatus>(input, "status") else {
                return missing("status");
            };
            dispatch(
                store,
                HotelCommand::StageRoomStatusChange {
                    room_number: number.to_owned(),
                    new_status: status,
                },
                format!("Staged room {number} as {}", status.as_str()),
            )
        }
        "commit_room_status" => dispatch(
            store,
            HotelCommand::CommitRoomStatusChange,
            "Room status committed".to_owned(),
        ),
        "cancel_room_status" => dispatch(
            store,
            HotelCommand::CancelRoomStatusChange,
            "Staged room status discarded".to_owned(),
        ),
        "stage_rate_change" => {
            let Some(room_type) = enum_arg::<RoomType>(input, "room_type") else {
                return missing("room_type");
            };
            let Some(date) = date_arg(input, "date") else {
                return ToolReply::invalid("'date' must be in YYYY-MM-DD form");
            };
            let Some(rate) = input.get("rate").and_then(|v| v.as_f64()) else {
                return missing("rate");
            };
            let Some(new_rate_cents) = dollars_to_cents(rate) else {
                return ToolReply::invalid("'rate' must be a non-negative dollar value");
            };
            dispatch(
                store,
                HotelCommand::StageRateChange {
                    room_type,
                    date,
                    new_rate_cents,
                },
                format!(
                    "Staged {} on {date} at ${:.2}",
                    room_type.as_str(),
                    rate
                ),
            )
        }
        "commit_rate_change" => dispatch(
            store,
            HotelCommand::CommitRateChange,
            "Rate change published".to_owned(),
        ),
        "cancel_rate_change" => dispatch(
            store,
            HotelCommand::CancelRateChange,
            "Staged rate change discarded".to_owned(),
        ),
        "update_housekeeping_task" => {
            let Some(task_id) = str_arg(input, "task_id") else {
                return missing("task_id");
            };
            dispatch(
                store,
                HotelCommand::UpdateHousekeepingTask {
                    task_id: task_id.to_owned(),
                    status: enum_arg::<HousekeepingStatus>(input, "status"),
                    priority: enum_arg::<TaskPriority>(input, "priority"),
                    assigned_to: str_arg(input, "assigned_to").map(str::to_owned),
                    notes: str_arg(input, "notes").map(str::to_owned),
                },
                format!("Updated task {task_id}"),
            )
        }
        "set_draft_message" => {
            let Some(recipient) = str_arg(input, "recipient") else {
                return missing("recipient");
            };
            let Some(body) = str_arg(input, "body") else {
                return missing("body");
            };
            dispatch(
                store,
                HotelCommand::SetDraftMessage {
                    draft: DraftMessage {
                        recipient: recipient.to_owned(),
                        body: body.to_owned(),
                    },
                },
                format!("Draft for {recipient} placed in the composer"),
            )
        }
        "clear_draft_message" => dispatch(
            store,
            HotelCommand::ClearDraftMessage,
            "Composer cleared".to_owned(),
        ),
        "set_key_generation" => {
            let Some(id) = str_arg(input, "reservation_id") else {
                return missing("reservation_id");
            };
            let Some(number) = str_arg(input, "room_number") else {
                return missing("room_number");
            };
            let Some(count) = input
                .get("count")
                .and_then(|v| v.as_u64())
                .and_then(|n| u8::try_from(n).ok())
            else {
                return missing("count");
            };
            dispatch(
                store,
                HotelCommand::SetKeyGeneration {
                    data: KeyGenerationData {
                        reservation_id: id.to_owned(),
                        room_number: number.to_owned(),
                        count,
                    },
                },
                format!("Key panel ready: {count} card(s) for room {number}"),
            )
        }
        "clear_key_generation" => dispatch(
            store,
            HotelCommand::ClearKeyGeneration,
            "Key panel cleared".to_owned(),
        ),
        "reset_state" => dispatch(
            store,
            HotelCommand::ResetState,
            "Demo reset to its seeded snapshot".to_owned(),
        ),
        "get_available_rooms" => {
            let room_type = enum_arg::<RoomType>(input, "room_type");
            let rooms = store.state().available_rooms(room_type);
            json_reply(format!("{} room(s) available", rooms.len()), &rooms)
        }
        "get_todays_arrivals" => {
            let arrivals = store.state().todays_arrivals();
            json_reply(format!("{} arrival(s) today", arrivals.len()), &arrivals)
        }
        "get_todays_departures" => {
            let departures = store.state().todays_departures();
            json_reply(
                format!("{} departure(s) today", departures.len()),
                &departures,
            )
        }
        "get_reservation" => {
            let Some(id) = str_arg(input, "reservation_id") else {
                return missing("reservation_id");
            };
            match ReservationCard::project(store.state(), id) {
                Some(card) => json_reply(format!("Reservation {id}"), &card),
                None => ToolReply::rejected(HotelError::ReservationNotFound(id.to_owned())),
            }
        }
        "get_guest" => {
            let Some(id) = str_arg(input, "guest_id") else {
                return missing("guest_id");
            };
            match store.state().guest(id) {
                Some(guest) => json_reply(format!("Guest {}", guest.name), guest),
                None => ToolReply::rejected(HotelError::GuestNotFound(id.to_owned())),
            }
        }
        "get_folio" => {
            let Some(id) = str_arg(input, "reservation_id") else {
                return missing("reservation_id");
            };
            match FolioView::project(store.state(), id) {
                Some(folio) => json_reply(
                    format!(
                        "Folio for {id}: committed ${:.2}, projected ${:.2}",
                        folio.committed_total_cents as f64 / 100.0,
                        folio.projected_total_cents as f64 / 100.0,
                    ),
                    &folio,
                ),
                None => ToolReply::rejected(HotelError::ReservationNotFound(id.to_owned())),
            }
        }
        "get_room_board" => {
            let board = RoomBoard::project(store.state());
            json_reply(
                format!(
                    "{} occupied, {} available of {} rooms",
                    board.occupied,
                    board.available,
                    board.tiles.len()
                ),
                &board,
            )
        }
        "get_rate_sheet" => {
            let Some(room_type) = enum_arg::<RoomType>(input, "room_type") else {
                return missing("room_type");
            };
            let sheet = RateSheet::project(store.state(), room_type);
            json_reply(
                format!("{} rate row(s) for {}", sheet.rows.len(), room_type.as_str()),
                &sheet,
            )
        }
        _ => ToolReply::invalid(format!("Unknown tool: {name}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::staging::StagedBilling;
    use std::collections::HashSet;

    #[test]
    fn definitions_are_unique_with_object_schemas() {
        let defs = definitions();
        let names: HashSet<_> = defs.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names.len(), defs.len());
        for def in &defs {
            let schema = def.input_schema();
            assert_eq!(schema["type"], "object", "{} schema", def.name);
            assert!(schema["properties"].is_object());
            assert!(schema["required"].is_array());
        }
    }

    #[test]
    fn check_in_script_runs_through_the_tool_layer() {
        let mut store = HotelStore::with_demo_data();
        let reply = handle_tool(
            &mut store,
            "start_check_in",
            &json!({"reservation_id": "res-1001"}),
        );
        assert!(!reply.is_error, "{}", reply.message);

        let reply = handle_tool(
            &mut store,
            "stage_room_assignment",
            &json!({"reservation_id": "res-1001", "room_number": "101"}),
        );
        assert!(!reply.is_error, "{}", reply.message);

        let reply = handle_tool(&mut store, "complete_check_in", &json!({}));
        assert!(!reply.is_error, "{}", reply.message);
        assert!(reply.message.contains("101"));
        assert_eq!(
            store.state().room("101").expect("seeded").status,
            RoomStatus::Occupied
        );
    }

    #[test]
    fn rejections_carry_the_error_kind() {
        let mut store = HotelStore::with_demo_data();
        let reply = handle_tool(
            &mut store,
            "select_reservation",
            &json!({"reservation_id": "res-999"}),
        );
        assert!(reply.is_error);
        assert_eq!(reply.error_kind, Some(ErrorKind::NotFound));

        let reply = handle_tool(&mut store, "commit_rate_change", &json!({}));
        assert!(reply.is_error);
        assert_eq!(reply.error_kind, Some(ErrorKind::InvalidState));
    }

    #[test]
    fn malformed_input_is_an_invalid_argument_reply() {
        let mut store = HotelStore::with_demo_data();
        let before = store.state().clone();

        let reply = handle_tool(&mut store, "navigate_to", &json!({}));
        assert!(reply.is_error);
        assert_eq!(reply.error_kind, Some(ErrorKind::InvalidArgument));

        let reply = handle_tool(&mut store, "no_such_tool", &json!({}));
        assert!(reply.is_error);
        assert_eq!(store.state(), &before);
    }

    #[test]
    fn dollar_amounts_become_cents_at_the_boundary() {
        let mut store = HotelStore::with_demo_data();
        let reply = handle_tool(
            &mut store,
            "add_billing_item",
            &json!({
                "reservation_id": "res-1001",
                "category": "Amenity",
                "description": "Rollaway bed",
                "amount": 35.0,
            }),
        );
        assert!(!reply.is_error, "{}", reply.message);

        let staged = &store.state().staging.billing_changes;
        assert_eq!(staged.len(), 1);
        let StagedBilling::Add { item } = &staged[0].change else {
            panic!("expected a staged add");
        };
        assert_eq!(item.amount_cents, 3_500);
    }

    #[test]
    fn query_tools_return_structured_data() {
        let mut store = HotelStore::with_demo_data();
        let reply = handle_tool(
            &mut store,
            "get_available_rooms",
            &json!({"room_type": "King"}),
        );
        assert!(!reply.is_error);
        let data = reply.data.expect("query carries data");
        let numbers: Vec<&str> = data
            .as_array()
            .expect("array payload")
            .iter()
            .filter_map(|r| r["number"].as_str())
            .collect();
        assert_eq!(numbers, vec!["104", "203"]);

        let reply = handle_tool(&mut store, "get_folio", &json!({"reservation_id": "res-1003"}));
        assert!(!reply.is_error);
        let folio = reply.data.expect("query carries data");
        assert_eq!(folio["committed_total_cents"], 52_340);
    }
}
