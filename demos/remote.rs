use fdpwn::connection::{Connection, Remote};

#[tokio::main]
async fn main() -> fdpwn::error::Result<()> {
    env_logger::init();
    let conn = Remote::new("127.0.0.1:12345").await?;
    conn.interactive().await?;
    Ok(())
}
