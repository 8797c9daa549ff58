//! Subreddits and their post listings

use crate::error::{Error, Result};
use crate::http::{ApiRequest, Transport};
use crate::listing::{decode_page, decode_post_and_comments, decode_records, decode_thing, Page};
use crate::model::{Ban, Moderator, Post, PostAndComments, Relationship, Subreddit};
use crate::pagination::{paginate, ListOptions, PageWalker};
use crate::types::{PostSort, SubredditSearchSort, TimeFilter};
use futures::stream::Stream;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::sync::Arc;

/// Subreddit endpoints
#[derive(Clone)]
pub struct SubredditService {
    transport: Arc<dyn Transport>,
}

impl SubredditService {
    /// Create a service over a transport
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    // ------------------------------------------------------------------------
    // Post listings
    // ------------------------------------------------------------------------

    /// One page of a subreddit's posts
    ///
    /// `time` is only sent for sorts that honour it.
    pub async fn posts(
        &self,
        subreddit: &str,
        sort: PostSort,
        time: Option<TimeFilter>,
        options: &ListOptions,
    ) -> Result<Page<Post>> {
        require_name(subreddit)?;
        let mut request = ApiRequest::get(format!("r/{subreddit}/{}", sort.as_str()))
            .with_query(options.to_params());
        if let Some(time) = time.filter(|_| sort.accepts_time_filter()) {
            request = request.query("t", time.as_str());
        }
        self.page(request).await
    }

    /// Hot posts
    pub async fn hot(&self, subreddit: &str, options: &ListOptions) -> Result<Page<Post>> {
        self.posts(subreddit, PostSort::Hot, None, options).await
    }

    /// Newest posts
    pub async fn new_posts(&self, subreddit: &str, options: &ListOptions) -> Result<Page<Post>> {
        self.posts(subreddit, PostSort::New, None, options).await
    }

    /// Rising posts
    pub async fn rising(&self, subreddit: &str, options: &ListOptions) -> Result<Page<Post>> {
        self.posts(subreddit, PostSort::Rising, None, options).await
    }

    /// Controversial posts within a time window
    pub async fn controversial(
        &self,
        subreddit: &str,
        time: Option<TimeFilter>,
        options: &ListOptions,
    ) -> Result<Page<Post>> {
        self.posts(subreddit, PostSort::Controversial, time, options)
            .await
    }

    /// Top posts within a time window
    pub async fn top(
        &self,
        subreddit: &str,
        time: Option<TimeFilter>,
        options: &ListOptions,
    ) -> Result<Page<Post>> {
        self.posts(subreddit, PostSort::Top, time, options).await
    }

    /// Stream pages of a subreddit's posts, following `after` cursors
    pub fn post_pages<'a>(
        &'a self,
        subreddit: &'a str,
        sort: PostSort,
        walker: PageWalker,
    ) -> impl Stream<Item = Result<Page<Post>>> + 'a {
        paginate(walker, move |options| async move {
            self.posts(subreddit, sort, None, &options).await
        })
    }

    // ------------------------------------------------------------------------
    // Subreddit lookups
    // ------------------------------------------------------------------------

    /// Details of one subreddit
    pub async fn get(&self, name: &str) -> Result<Subreddit> {
        require_name(name)?;
        let body = self
            .transport
            .send(ApiRequest::get(format!("r/{name}/about")))
            .await?;
        decode_thing(&body)
    }

    /// Popular subreddits
    pub async fn popular(&self, options: &ListOptions) -> Result<Page<Subreddit>> {
        self.subreddits("subreddits/popular", options).await
    }

    /// Newest subreddits
    pub async fn new_subreddits(&self, options: &ListOptions) -> Result<Page<Subreddit>> {
        self.subreddits("subreddits/new", options).await
    }

    /// Gold-only subreddits
    pub async fn gold(&self, options: &ListOptions) -> Result<Page<Subreddit>> {
        self.subreddits("subreddits/gold", options).await
    }

    /// Default subreddits
    pub async fn default_subreddits(&self, options: &ListOptions) -> Result<Page<Subreddit>> {
        self.subreddits("subreddits/default", options).await
    }

    /// Subreddits you are subscribed to
    pub async fn subscribed(&self, options: &ListOptions) -> Result<Page<Subreddit>> {
        self.subreddits("subreddits/mine/subscriber", options).await
    }

    /// Subreddits you are an approved user in
    pub async fn approved(&self, options: &ListOptions) -> Result<Page<Subreddit>> {
        self.subreddits("subreddits/mine/contributor", options)
            .await
    }

    /// Subreddits you moderate
    pub async fn moderated(&self, options: &ListOptions) -> Result<Page<Subreddit>> {
        self.subreddits("subreddits/mine/moderator", options).await
    }

    /// A random subreddit
    pub async fn random(&self) -> Result<Subreddit> {
        self.random_from("r/random").await
    }

    /// A random NSFW subreddit
    pub async fn random_nsfw(&self) -> Result<Subreddit> {
        self.random_from("r/randnsfw").await
    }

    /// Text shown to users on the subreddit's submission page
    pub async fn submission_text(&self, name: &str) -> Result<String> {
        #[derive(Deserialize)]
        struct SubmitText {
            #[serde(default, deserialize_with = "crate::model::nullable")]
            submit_text: String,
        }

        require_name(name)?;
        let body = self
            .transport
            .send(ApiRequest::get(format!("r/{name}/api/submit_text")))
            .await?;
        let text: SubmitText = serde_json::from_slice(&body)
            .map_err(|e| Error::decode(format!("Invalid submit text: {e}")))?;
        Ok(text.submit_text)
    }

    /// The first stickied post and its comments
    pub async fn sticky1(&self, name: &str) -> Result<PostAndComments> {
        self.sticky(name, 1).await
    }

    /// The second stickied post and its comments
    pub async fn sticky2(&self, name: &str) -> Result<PostAndComments> {
        self.sticky(name, 2).await
    }

    async fn sticky(&self, name: &str, num: u8) -> Result<PostAndComments> {
        require_name(name)?;
        let request =
            ApiRequest::get(format!("r/{name}/about/sticky")).query("num", num.to_string());
        let body = self.transport.send(request).await?;
        decode_post_and_comments(&body)
    }

    async fn random_from(&self, path: &str) -> Result<Subreddit> {
        let request = ApiRequest::get(path)
            .query("sr_detail", "true")
            .query("limit", "1");
        let page: Page<Post> = self.page(request).await?;
        page.into_iter()
            .find_map(|post| post.subreddit_detail)
            .map(|subreddit| *subreddit)
            .ok_or_else(|| Error::decode("Random listing holds no subreddit details"))
    }

    // ------------------------------------------------------------------------
    // Relationships
    // ------------------------------------------------------------------------

    /// Users banned from the subreddit
    pub async fn banned(&self, name: &str, options: &ListOptions) -> Result<Page<Ban>> {
        self.relationships(name, "banned", options).await
    }

    /// Users muted in the subreddit
    pub async fn muted(&self, name: &str, options: &ListOptions) -> Result<Page<Relationship>> {
        self.relationships(name, "muted", options).await
    }

    /// Users banned from the subreddit's wiki
    pub async fn wiki_banned(&self, name: &str, options: &ListOptions) -> Result<Page<Ban>> {
        self.relationships(name, "wikibanned", options).await
    }

    /// Approved users of the subreddit
    pub async fn contributors(
        &self,
        name: &str,
        options: &ListOptions,
    ) -> Result<Page<Relationship>> {
        self.relationships(name, "contributors", options).await
    }

    /// Approved wiki contributors of the subreddit
    pub async fn wiki_contributors(
        &self,
        name: &str,
        options: &ListOptions,
    ) -> Result<Page<Relationship>> {
        self.relationships(name, "wikicontributors", options).await
    }

    /// Moderators of the subreddit
    pub async fn moderators(&self, name: &str) -> Result<Vec<Moderator>> {
        let page: Page<Moderator> = self
            .relationships(name, "moderators", &ListOptions::new())
            .await?;
        Ok(page.items)
    }

    async fn relationships<T: DeserializeOwned>(
        &self,
        name: &str,
        list: &str,
        options: &ListOptions,
    ) -> Result<Page<T>> {
        require_name(name)?;
        let request = ApiRequest::get(format!("r/{name}/about/{list}"))
            .with_query(options.to_params());
        let body = self.transport.send(request).await?;
        decode_records(&body)
    }

    // ------------------------------------------------------------------------
    // Search
    // ------------------------------------------------------------------------

    /// Search subreddits by name and description
    pub async fn search(
        &self,
        query: &str,
        sort: Option<SubredditSearchSort>,
        options: &ListOptions,
    ) -> Result<Page<Subreddit>> {
        let mut request = ApiRequest::get("subreddits/search")
            .query("q", query)
            .with_query(options.to_params());
        if let Some(sort) = sort {
            request = request.query("sort", sort.as_str());
        }
        self.page(request).await
    }

    /// Subreddit names starting with `query`
    pub async fn search_names(&self, query: &str) -> Result<Vec<String>> {
        #[derive(Deserialize)]
        struct Names {
            names: Vec<String>,
        }

        let body = self
            .transport
            .send(ApiRequest::get("api/search_reddit_names").query("query", query))
            .await?;
        let names: Names = serde_json::from_slice(&body)
            .map_err(|e| Error::decode(format!("Invalid name list: {e}")))?;
        Ok(names.names)
    }

    /// Search posts, site-wide when `subreddits` is empty
    pub async fn search_posts(
        &self,
        query: &str,
        subreddits: &[&str],
        options: &ListOptions,
    ) -> Result<Page<Post>> {
        let request = if subreddits.is_empty() {
            ApiRequest::get("r/all/search").query("q", query)
        } else {
            ApiRequest::get(format!("r/{}/search", subreddits.join("+")))
                .query("q", query)
                .query("restrict_sr", "true")
        };
        self.page(request.with_query(options.to_params())).await
    }

    // ------------------------------------------------------------------------
    // Subscriptions
    // ------------------------------------------------------------------------

    /// Subscribe to subreddits by name
    pub async fn subscribe(&self, names: &[&str]) -> Result<()> {
        self.set_subscription("sub", names).await
    }

    /// Unsubscribe from subreddits by name
    pub async fn unsubscribe(&self, names: &[&str]) -> Result<()> {
        self.set_subscription("unsub", names).await
    }

    async fn set_subscription(&self, action: &str, names: &[&str]) -> Result<()> {
        if names.is_empty() {
            return Err(Error::invalid_argument("must provide at least 1 subreddit"));
        }
        let form = vec![
            ("action".to_string(), action.to_string()),
            ("sr_name".to_string(), names.join(",")),
        ];
        self.transport
            .send(ApiRequest::post("api/subscribe").form(form))
            .await?;
        Ok(())
    }

    async fn subreddits(&self, path: &str, options: &ListOptions) -> Result<Page<Subreddit>> {
        self.page(ApiRequest::get(path).with_query(options.to_params()))
            .await
    }

    async fn page<T: crate::thing::ThingData>(&self, request: ApiRequest) -> Result<Page<T>> {
        let body = self.transport.send(request).await?;
        decode_page(&body)
    }
}

fn require_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(Error::invalid_argument("subreddit name cannot be empty"));
    }
    Ok(())
}

impl std::fmt::Debug for SubredditService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SubredditService").finish_non_exhaustive()
    }
}
