use crate::presentation::presenters::present_user_list;
use crate::presentation::views::UserListView;
use crate::types::{OutputFormat, SortField, SortOrder};
use anyhow::Result;
use rolodex_api::DirectorySource;
use rolodex_engine::{CompanyFilter, DirectoryQuery, SortSpec};

pub async fn handle(
    source: &dyn DirectorySource,
    search: Option<String>,
    company: Option<String>,
    sort: Option<SortField>,
    order: SortOrder,
    format: OutputFormat,
) -> Result<()> {
    let users = source.fetch_users().await?;

    let mut query = DirectoryQuery::new();
    if let Some(term) = search.as_deref() {
        query = query.search(term);
    }
    if let Some(name) = company.as_deref() {
        query = query.company(CompanyFilter::parse(name));
    }
    if let Some(field) = sort {
        query = query.sort(SortSpec::new(field.into(), order.into()));
    }

    let visible = rolodex_engine::apply(&users, &query);

    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&visible)?);
    } else {
        let view_model = present_user_list(&visible, users.len());
        print!("{}", UserListView::new(&view_model));
    }

    Ok(())
}
