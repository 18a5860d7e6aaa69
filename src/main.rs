#[macro_use]
extern crate rocket;

use rocket::fairing::{Fairing, Info, Kind};
use rocket::fs::FileServer;
use rocket::http::Header;
use rocket::response::content::RawHtml;
use rocket::{Build, Rocket};

mod boot;
mod config;
mod contact;
mod gallery;
mod layout;
mod mail;
mod models;
mod news;
mod render;
mod routes;


use config::SiteConfig;
use mail::{Mailer, SmtpMailer};
use news::NewsSource;

/// Keeps browsers and proxies from caching the news JSON.
pub struct NoStoreFeed;

#[rocket::async_trait]
impl Fairing for NoStoreFeed {
    fn info(&self) -> Info {
        Info { name: "No-Store News Feed", kind: Kind::Response }
    }

    async fn on_response<'r>(&self, req: &'r rocket::Request<'_>, res: &mut rocket::Response<'r>) {
        if req.uri().path().starts_with("/assets/json/") {
            res.set_header(Header::new("Cache-Control", "no-store, no-cache, must-revalidate, max-age=0"));
            res.set_header(Header::new("Pragma", "no-cache"));
        }
    }
}

#[catch(404)]
fn not_found() -> RawHtml<String> {
    RawHtml("<html><body style='font-family:sans-serif;text-align:center;padding:80px'><h1>404</h1><p>ページが見つかりません。</p><a href='/'>← Home</a></body></html>".to_string())
}

#[catch(500)]
fn server_error() -> RawHtml<String> {
    RawHtml("<html><body style='font-family:sans-serif;text-align:center;padding:80px'><h1>500</h1><p>Internal server error.</p><a href='/'>← Home</a></body></html>".to_string())
}

/// Assemble the site. Split from `rocket()` so tests can inject their own
/// config and mail transport.
pub fn build(config: SiteConfig, mailer: Mailer) -> Rocket<Build> {
    let source = NewsSource::from_location(&config.news_source);
    let assets = FileServer::from(&config.assets_dir);

    log::info!("News feed: {}", source.describe());

    rocket::build()
        .manage(config)
        .manage(source)
        .manage(mailer)
        .attach(NoStoreFeed)
        .mount("/assets", assets)
        .mount("/", routes::public::routes())
        .mount("/", routes::contact::routes())
        .register("/", catchers![not_found, server_error])
}

#[launch]
fn rocket() -> _ {
    env_logger::init();

    let config = match SiteConfig::load() {
        Ok(config) => config,
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(1);
        }
    };

    // Boot check: create directories, validate the news feed and mail settings
    boot::run(&config);

    let mailer = Mailer::new(SmtpMailer::new(config.mail.clone()));
    build(config, mailer)
}
