use actix_cors::Cors;
use actix_web::{dev::Server, error, http, web, App, HttpServer};
use std::net::TcpListener;
use std::sync::Arc;
use tracing_actix_web::TracingLogger;

use crate::configuration::Settings;
use crate::connectors;
use crate::routes;
use crate::services::{ConversationService, MatchService};
use crate::storage::Storage;

pub fn run(
    listener: TcpListener,
    storage: Arc<dyn Storage>,
    settings: Settings,
) -> Result<Server, std::io::Error> {
    let describe_connector = web::Data::new(connectors::init_describe(&settings.ai));

    let matcher = web::Data::new(MatchService::new(storage.clone()));
    let conversations = web::Data::new(ConversationService::new(storage.clone()));
    let storage = web::Data::new(storage);

    let json_config = web::JsonConfig::default().error_handler(|err, _req| {
        let msg: String = match err {
            error::JsonPayloadError::Deserialize(err) => format!(
                "{{\"kind\":\"deserialize\",\"line\":{}, \"column\":{}, \"msg\":\"{}\"}}",
                err.line(),
                err.column(),
                err
            ),
            _ => format!("{{\"kind\":\"other\",\"msg\":\"{}\"}}", err),
        };
        error::InternalError::new(msg, http::StatusCode::BAD_REQUEST).into()
    });

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .wrap(Cors::permissive())
            .app_data(json_config.clone())
            .app_data(storage.clone())
            .app_data(matcher.clone())
            .app_data(conversations.clone())
            .app_data(describe_connector.clone())
            .service(web::scope("/health_check").service(routes::health_check))
            .service(web::scope("/auth").service(routes::auth::login_handler))
            .service(
                web::scope("/found_items")
                    .service(routes::found_item::add_handler)
                    .service(routes::found_item::list_handler)
                    .service(routes::found_item::user_list_handler)
                    .service(routes::found_item::delete_handler),
            )
            .service(
                web::scope("/lost_items")
                    .service(routes::lost_item::add_handler)
                    .service(routes::lost_item::list_handler)
                    .service(routes::lost_item::user_list_handler),
            )
            .service(
                web::scope("/chats")
                    .service(routes::chat::add_handler)
                    .service(routes::chat::user_list_handler)
                    .service(routes::chat::get_handler),
            )
            .service(
                web::scope("/messages")
                    .service(routes::message::add_handler)
                    .service(routes::message::image_handler),
            )
            .service(
                web::scope("/describe")
                    .service(routes::describe::image_handler)
                    .service(routes::describe::prompt_handler),
            )
    })
    .listen(listener)?
    .run();

    Ok(server)
}
