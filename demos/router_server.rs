//! A router server demonstrating route templates, typed parameters and structured errors.

use microroute_rs::{
    App, ConversionPolicy, HandlerError, HttpException, HttpServer, Param, ParamType, Params,
    Response, ServerConfig,
};
use serde::Serialize;

#[derive(Serialize)]
struct Item {
    id: i64,
    name: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .init();

    let mut app = App::new();

    // 1. Static HTML page
    app.get("/", Vec::new(), |_: Params| async {
        Ok::<_, HandlerError>(Response::html(
            "<html><body><h1>Welcome to microroute-rs!</h1></body></html>",
        ))
    })?;

    // 2. Query parameter with a default
    app.get(
        "/hello",
        vec![Param::new("name").with_default("World")],
        |params: Params| async move {
            let name: String = params.get("name")?;
            Ok::<_, HandlerError>(format!("Hello, {name}!"))
        },
    )?;

    // 3. Typed path parameter, 404 for unknown items
    app.get(
        "/items/{item_id}",
        vec![Param::new("item_id").typed(ParamType::Int)],
        |params: Params| async move {
            let id: i64 = params.get("item_id")?;
            if id > 100 {
                let missing = HttpException::new(404).with_detail(format!("no item {id}"));
                return Err(HandlerError::from(missing));
            }
            Ok::<_, HandlerError>(Response::json(&Item {
                id,
                name: format!("item-{id}"),
            })?)
        },
    )?;

    // 4. The request context itself
    app.post(
        "/echo/{what}",
        vec![Param::new("what"), Param::context("request")],
        |params: Params| async move {
            let what: String = params.get("what")?;
            let ctx = params.context("request")?;
            let agent = ctx.header("User-Agent").unwrap_or("unknown");
            let body = format!("{what} from {agent}");
            Ok::<_, HandlerError>(Response::new(body).with_status(201))
        },
    )?;

    let config = ServerConfig {
        addr: "127.0.0.1:8080".parse()?,
        conversion_failure: ConversionPolicy::BadRequest,
        ..ServerConfig::default()
    };

    println!("Server starting on http://127.0.0.1:8080");
    println!("Try these endpoints:");
    println!("  - GET  http://127.0.0.1:8080/");
    println!("  - GET  http://127.0.0.1:8080/hello?name=YourName");
    println!("  - GET  http://127.0.0.1:8080/items/7");
    println!("  - GET  http://127.0.0.1:8080/items/abc   (400, conversion failure)");
    println!("  - POST http://127.0.0.1:8080/echo/ping");

    HttpServer::new(config, app).start().await?;

    Ok(())
}
