use crate::presentation::presenters::present_companies;
use crate::presentation::views::CompanyListView;
use crate::types::OutputFormat;
use anyhow::Result;
use rolodex_api::DirectorySource;

pub async fn handle(source: &dyn DirectorySource, format: OutputFormat) -> Result<()> {
    let users = source.fetch_users().await?;
    let view_model = present_companies(&users);

    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&view_model.companies)?);
    } else {
        print!("{}", CompanyListView::new(&view_model));
    }

    Ok(())
}
