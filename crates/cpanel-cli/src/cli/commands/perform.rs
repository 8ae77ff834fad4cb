//! `certbot-dns-cpanel perform` - publish the validation record.

use anyhow::Result;
use tracing::debug;

use super::Context;
use crate::cli::args::ChallengeArgs;
use crate::output::print_challenge;

pub async fn execute(ctx: Context, args: ChallengeArgs) -> Result<()> {
    let auth = ctx.authenticator()?;
    let request = args.into_request();
    debug!(domain = %request.domain, record = %request.validation_name, "perform");

    let outcomes = auth.perform_all(std::slice::from_ref(&request)).await?;
    for outcome in outcomes {
        print_challenge(ctx.output_format, &request, outcome)?;
    }

    Ok(())
}
