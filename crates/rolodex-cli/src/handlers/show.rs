use crate::presentation::presenters::present_user_detail;
use crate::presentation::views::UserDetailView;
use crate::types::OutputFormat;
use anyhow::Result;
use rolodex_api::{DirectorySource, load_detail};
use rolodex_types::UserId;

pub async fn handle(source: &dyn DirectorySource, id: UserId, format: OutputFormat) -> Result<()> {
    let detail = load_detail(source, id).await?;

    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&detail)?);
    } else {
        let view_model = present_user_detail(&detail);
        print!("{}", UserDetailView::new(&view_model));
    }

    Ok(())
}
