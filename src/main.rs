use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let result = volatilewatch::run(std::env::args_os()).await;
    ExitCode::from(volatilewatch::report(&result, &mut std::io::stderr()))
}
