use libtest_mimic::Arguments;
use lfm::error::Result;

mod operations;
mod utils;

pub use utils::*;

fn main() -> Result<()> {
    let args = Arguments::from_args();

    let lfm = init_test_service()?;

    let mut tests = Vec::new();

    operations::list::tests(&lfm, &mut tests);
    operations::mkdir::tests(&lfm, &mut tests);
    operations::delete::tests(&lfm, &mut tests);
    operations::resolve::tests(&lfm, &mut tests);

    let _ = tracing_subscriber::fmt()
        .pretty()
        .with_test_writer()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();

    let conclusion = libtest_mimic::run(&args, tests);

    TEST_FIXTURE.cleanup();

    conclusion.exit()
}
