use crate::config::SimulationConfig;
use crate::report::{self, Report};
use crate::simulation::{simulate, SimulationResult};
use failure::Error;
use rocket::http::Status;
use rocket::response::content::RawHtml;
use rocket::response::status::Custom;
use rocket::serde::json::{json, Json, Value};
use rocket::{Build, Rocket};
use tracing::warn;

type ApiError = Custom<Json<Value>>;

fn bad_request(message: String) -> ApiError {
    warn!(%message, "rejected simulation request");

    Custom(Status::BadRequest, Json(json!({ "error": message })))
}

fn run(config: &SimulationConfig) -> Result<SimulationResult, ApiError> {
    simulate(config).map_err(|err| bad_request(err.to_string()))
}

#[post("/simulate", format = "application/json", data = "<config>")]
fn server_simulate(config: Json<SimulationConfig>) -> Result<Json<Value>, ApiError> {
    let result = run(&config)?;

    let report = Report {
        inputs: &config,
        results: &result,
    };

    serde_json::to_value(&report)
        .map(Json)
        .map_err(|err| Custom(Status::InternalServerError, Json(json!({ "error": err.to_string() }))))
}

#[post("/report", format = "application/json", data = "<config>")]
fn server_report(config: Json<SimulationConfig>) -> Result<RawHtml<String>, ApiError> {
    let result = run(&config)?;

    report::render_html(&config, &result)
        .map(RawHtml)
        .map_err(|err| Custom(Status::InternalServerError, Json(json!({ "error": err.to_string() }))))
}

#[get("/health")]
fn server_health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

pub fn build(rocket: Rocket<Build>) -> Result<Rocket<Build>, Error> {
    let cors = rocket_cors::CorsOptions::default().to_cors()?;

    Ok(rocket
        .attach(cors)
        .mount("/", routes![server_simulate, server_report, server_health]))
}

pub fn run_server(port: u16) -> Result<(), Error> {
    let figment = rocket::Config::figment().merge(("port", port));
    let server = build(rocket::custom(figment))?;

    rocket::execute(server.launch()).map_err(|err| format_err!("server failed: {}", err))?;

    Ok(())
}
