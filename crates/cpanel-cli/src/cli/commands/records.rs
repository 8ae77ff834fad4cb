//! `certbot-dns-cpanel records` - list what a zone holds.

use anyhow::Result;

use super::Context;
use crate::cli::args::RecordsArgs;
use crate::output::print_records;

pub async fn execute(ctx: Context, args: RecordsArgs) -> Result<()> {
    let auth = ctx.authenticator()?;

    let mut fetch = auth.editor().zone_edit().fetch(args.zone);
    if let Some(name) = args.name {
        fetch = fetch.name(name);
    }
    if let Some(rtype) = args.record_type {
        fetch = fetch.record_type(rtype);
    }

    let records = fetch.send().await?.into_vec();
    print_records(ctx.output_format, &records, ctx.verbose)
}
