use android_mirror_run::args::Args;
use android_mirror_run::run;

fn main() {
    env_logger::init();

    let Some(args) = Args::parse() else {
        return;
    };

    let rt = tokio::runtime::Runtime::new().unwrap();
    if let Err(err) = rt.block_on(run::run(&args.config)) {
        eprintln!("❌ {err}");
        std::process::exit(1);
    }
}
