use actix_web::error::InternalError;
use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use serde_derive::Serialize;
use uuid::Uuid;

#[derive(Serialize)]
pub(crate) struct JsonResponse<T> {
    pub(crate) status: String,
    pub(crate) message: String,
    pub(crate) code: u32,
    pub(crate) id: Option<Uuid>,
    pub(crate) item: Option<T>,
    pub(crate) list: Option<Vec<T>>,
}

pub(crate) struct JsonResponseBuilder<T>
where
    T: serde::Serialize,
{
    id: Option<Uuid>,
    item: Option<T>,
    list: Option<Vec<T>>,
}

impl<T: serde::Serialize> Default for JsonResponseBuilder<T> {
    fn default() -> Self {
        Self {
            id: None,
            item: None,
            list: None,
        }
    }
}

impl<T: serde::Serialize> JsonResponse<T> {
    pub(crate) fn build() -> JsonResponseBuilder<T> {
        JsonResponseBuilder::default()
    }
}

impl<T: serde::Serialize> JsonResponseBuilder<T> {
    pub(crate) fn set_id(mut self, id: Uuid) -> Self {
        self.id = Some(id);
        self
    }

    pub(crate) fn set_item(mut self, item: T) -> Self {
        self.item = Some(item);
        self
    }

    pub(crate) fn set_list(mut self, list: Vec<T>) -> Self {
        self.list = Some(list);
        self
    }

    pub(crate) fn ok(self, message: impl ToString) -> HttpResponse {
        let message = non_empty(message.to_string(), "Success");
        HttpResponse::Ok().json(JsonResponse {
            status: "OK".to_string(),
            message,
            code: 200,
            id: self.id,
            item: self.item,
            list: self.list,
        })
    }

    fn error(self, code: StatusCode, message: String) -> actix_web::Error {
        let body = JsonResponse::<T> {
            status: "Error".to_string(),
            message,
            code: code.as_u16() as u32,
            id: self.id,
            item: self.item,
            list: self.list,
        };
        let json = serde_json::to_string(&body)
            .unwrap_or_else(|_| r#"{"status":"Error","code":500}"#.to_string());
        InternalError::new(json, code).into()
    }

    pub(crate) fn bad_request(self, message: impl ToString) -> actix_web::Error {
        let message = non_empty(message.to_string(), "Validation error");
        self.error(StatusCode::BAD_REQUEST, message)
    }

    pub(crate) fn not_found(self, message: impl ToString) -> actix_web::Error {
        let message = non_empty(message.to_string(), "Object not found");
        self.error(StatusCode::NOT_FOUND, message)
    }

    pub(crate) fn internal_server_error(self, message: impl ToString) -> actix_web::Error {
        let message = non_empty(message.to_string(), "Internal error");
        self.error(StatusCode::INTERNAL_SERVER_ERROR, message)
    }
}

fn non_empty(message: String, fallback: &str) -> String {
    if message.trim().is_empty() {
        fallback.to_string()
    } else {
        message
    }
}
