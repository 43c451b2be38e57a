#[actix_web::main]
async fn main() -> std::io::Result<()> {
    faktur_server::run().await
}
