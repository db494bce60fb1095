//! Selector chains for product pages, current layout first, legacy after.

use std::sync::LazyLock;

use crate::strategy::SelectorChain;

pub(super) static TITLE: LazyLock<SelectorChain> = LazyLock::new(|| {
    SelectorChain::new(&[
        "[data-testid='hero-title'] h1",
        ".c-productHero_title h1",
        ".c-productHero_title",
        ".product_title h1",
        ".product_title a",
    ])
});

pub(super) static PLATFORM: LazyLock<SelectorChain> = LazyLock::new(|| {
    SelectorChain::new(&[
        "[data-testid='hero-platform']",
        ".c-ProductHeroGamePlatformInfo",
        ".product_title .platform a",
        ".product_title .platform",
        "span.platform",
    ])
});

pub(super) static METASCORE: LazyLock<SelectorChain> = LazyLock::new(|| {
    SelectorChain::new(&[
        "[data-testid='critic-score-info'] .c-siteReviewScore span",
        ".c-productScoreInfo_scoreNumber .c-siteReviewScore_background-critic_medium span",
        ".metascore_summary .metascore_w span",
        ".metascore_summary .metascore_w",
    ])
});

pub(super) static USERSCORE: LazyLock<SelectorChain> = LazyLock::new(|| {
    SelectorChain::new(&[
        "[data-testid='user-score-info'] .c-siteReviewScore span",
        ".c-productScoreInfo_scoreNumber .c-siteReviewScore_background-user span",
        ".userscore_wrap .metascore_w",
        ".feature_userscore .metascore_w",
    ])
});

pub(super) static CRITIC_COUNT: LazyLock<SelectorChain> = LazyLock::new(|| {
    SelectorChain::new(&[
        "[data-testid='critic-score-info'] .c-productScoreInfo_reviewsTotal span",
        "[data-testid='critic-score-info'] .c-productScoreInfo_reviewsTotal",
        ".metascore_summary .count a span",
        ".metascore_summary .count a",
    ])
});

pub(super) static USER_COUNT: LazyLock<SelectorChain> = LazyLock::new(|| {
    SelectorChain::new(&[
        "[data-testid='user-score-info'] .c-productScoreInfo_reviewsTotal span",
        "[data-testid='user-score-info'] .c-productScoreInfo_reviewsTotal",
        ".userscore_wrap .count a",
        ".feature_userscore .count a",
    ])
});

pub(super) static RELEASE_DATE: LazyLock<SelectorChain> = LazyLock::new(|| {
    SelectorChain::new(&[
        "[data-testid='release-date']",
        ".c-gameDetails_ReleaseDate span.g-outer-spacing-left-medium-fluid",
        ".c-gameDetails_ReleaseDate span:last-child",
        ".summary_detail.release_data .data",
        "li.release_data span.data",
    ])
});

/// Entry and sub-field chains for one review kind.
pub(super) struct ReviewSelectors {
    pub entries: SelectorChain,
    pub source: SelectorChain,
    pub score: SelectorChain,
    pub date: SelectorChain,
    pub quote: SelectorChain,
    /// Outbound link to the full review; critic entries only.
    pub link: Option<SelectorChain>,
}

pub(super) static CRITIC_REVIEWS: LazyLock<ReviewSelectors> = LazyLock::new(|| ReviewSelectors {
    entries: SelectorChain::new(&[
        "[data-testid='critic-reviews'] .c-siteReview",
        ".c-reviewsSection_criticReviews .c-siteReview",
        "ol.critic_reviews li.critic_review",
        ".critic_reviews .review",
    ]),
    source: SelectorChain::new(&[
        ".c-siteReviewHeader_publicationName",
        ".c-siteReview_publicationName",
        ".source a",
        ".source",
    ]),
    score: SelectorChain::new(&[
        ".c-siteReviewScore span",
        ".c-siteReviewHeader_reviewScore",
        ".review_grade .metascore_w",
        ".metascore_w",
    ]),
    date: SelectorChain::new(&[
        ".c-siteReviewHeader_reviewDate",
        ".c-siteReview_reviewDate",
        ".date",
    ]),
    quote: SelectorChain::new(&[
        ".c-siteReview_quote span",
        ".c-siteReview_quote",
        ".review_body",
    ]),
    link: Some(SelectorChain::new(&[
        "a.c-siteReview_externalLink",
        ".full_review a",
        ".source a",
    ])),
});

pub(super) static USER_REVIEWS: LazyLock<ReviewSelectors> = LazyLock::new(|| ReviewSelectors {
    entries: SelectorChain::new(&[
        "[data-testid='user-reviews'] .c-siteReview",
        ".c-reviewsSection_userReviews .c-siteReview",
        "ol.user_reviews li.user_review",
        ".user_reviews .review",
    ]),
    source: SelectorChain::new(&[
        ".c-siteReviewHeader_username",
        ".c-siteReview_username",
        ".name a",
        ".name",
    ]),
    score: SelectorChain::new(&[
        ".c-siteReviewScore span",
        ".c-siteReviewHeader_reviewScore",
        ".review_grade .metascore_w",
        ".metascore_w",
    ]),
    date: SelectorChain::new(&[
        ".c-siteReviewHeader_reviewDate",
        ".c-siteReview_reviewDate",
        ".date",
    ]),
    quote: SelectorChain::new(&[
        ".c-siteReview_quote span",
        ".c-siteReview_quote",
        ".review_body .blurb_expanded",
        ".review_body",
    ]),
    link: None,
});
