use colab_db::updates::profile::{ProfileUpdate, ProfileUpdateBuilder};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::UpdateProfileArgs;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(args: &UpdateProfileArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let caller = ctx.caller_id().await?;
    let view = ctx
        .service
        .update_profile(args.user_id, caller, build_update(args))
        .await?;
    output(&view, flags.format)
}

fn build_update(args: &UpdateProfileArgs) -> ProfileUpdate {
    let mut builder = ProfileUpdateBuilder::new();
    if let Some(v) = &args.full_name {
        builder = builder.full_name(v);
    }
    if let Some(v) = &args.bio {
        builder = builder.bio(v);
    }
    if let Some(v) = &args.affiliation {
        builder = builder.affiliation(v);
    }
    if let Some(v) = &args.skills {
        builder = builder.skills(v);
    }
    if let Some(v) = &args.role {
        builder = builder.role(v);
    }
    if let Some(v) = &args.projects {
        builder = builder.projects(v);
    }
    if let Some(v) = &args.location {
        builder = builder.location(v);
    }
    if let Some(v) = &args.github {
        builder = builder.github(v);
    }
    builder.build()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn only_given_flags_become_assignments() {
        let args = UpdateProfileArgs {
            user_id: 1,
            full_name: Some("Ada Lovelace".into()),
            bio: None,
            affiliation: None,
            skills: None,
            role: None,
            projects: None,
            location: Some(String::new()),
            github: None,
        };
        let update = build_update(&args);
        assert_eq!(update.full_name.as_deref(), Some("Ada Lovelace"));
        assert_eq!(update.location.as_deref(), Some(""));
        assert!(update.bio.is_none());
    }
}
