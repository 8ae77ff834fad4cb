//! `certbot-dns-cpanel cleanup` - remove the validation record.

use anyhow::Result;

use super::Context;
use crate::cli::args::ChallengeArgs;
use crate::output::print_challenge;

pub async fn execute(ctx: Context, args: ChallengeArgs) -> Result<()> {
    let auth = ctx.authenticator()?;
    let request = args.into_request();

    let outcome = auth.cleanup(&request).await?;
    print_challenge(ctx.output_format, &request, outcome)
}
