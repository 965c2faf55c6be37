//! Input collection: turns the host's properties into an ordered URL batch.

/// Paged list of strings exposed by the host.
///
/// Hosts that already hold the whole list can use the `Vec<String>` impl.
pub trait PagedUrls: Send + Sync {
    fn length(&self) -> usize;
    fn get(&self, offset: usize, count: usize) -> Vec<String>;
}

impl PagedUrls for Vec<String> {
    fn length(&self) -> usize {
        self.len()
    }

    fn get(&self, offset: usize, count: usize) -> Vec<String> {
        self.iter().skip(offset).take(count).cloned().collect()
    }
}

/// Properties of one invocation. Only one of `single_url` / `url_list` is read,
/// selected by `list_mode`.
pub struct ActionRequest {
    pub list_mode: bool,
    pub single_url: Option<String>,
    pub url_list: Option<Box<dyn PagedUrls>>,
}

impl ActionRequest {
    pub fn single(url: impl Into<String>) -> Self {
        Self {
            list_mode: false,
            single_url: Some(url.into()),
            url_list: None,
        }
    }

    pub fn list(urls: impl PagedUrls + 'static) -> Self {
        Self {
            list_mode: true,
            single_url: None,
            url_list: Some(Box::new(urls)),
        }
    }
}

/// Ordered, trimmed, non-empty URLs. Indices correlate input and output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlBatch {
    urls: Vec<String>,
}

impl UrlBatch {
    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.urls.iter()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.urls
    }
}

impl FromIterator<String> for UrlBatch {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        let urls = iter
            .into_iter()
            .map(|u| u.trim().to_string())
            .filter(|u| !u.is_empty())
            .collect();
        Self { urls }
    }
}

/// Builds the batch from the request. Never fails; emptiness is left to
/// [`check_batch_len`](crate::bounds::check_batch_len).
pub fn collect_urls(request: &ActionRequest) -> UrlBatch {
    if request.list_mode {
        let Some(list) = request.url_list.as_ref() else {
            return UrlBatch::default();
        };
        let len = list.length();
        list.get(0, len).into_iter().collect()
    } else {
        request.single_url.iter().cloned().collect()
    }
}
