#[actix_web::main]
async fn main() -> std::io::Result<()> {
    xray_testgen_lib::run().await
}
