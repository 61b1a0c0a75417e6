//! Community forum: browse posts by category, publish and discuss.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::http::ApiError;
use crate::net::types::{CommentList, NewComment, NewPost, Post};
use crate::state::session::SessionStore;
use crate::util::auth::install_unauth_redirect;

#[cfg(test)]
#[path = "community_test.rs"]
mod community_test;

const CATEGORIES: [&str; 5] = ["general", "safety", "health", "pregnancy", "support"];

/// The "all" filter maps to no category query at all.
fn category_filter(selected: &str) -> Option<&str> {
    if selected == "all" { None } else { Some(selected) }
}

#[component]
pub fn CommunityPage() -> impl IntoView {
    let store = expect_context::<SessionStore>();
    install_unauth_redirect(store.clone(), use_navigate());

    let user_id = Signal::derive({
        let store = store.clone();
        move || store.user().map(|u| u.id)
    });

    let selected_category = RwSignal::new("all".to_owned());

    let posts = LocalResource::new(move || {
        let category = selected_category.get();
        async move { crate::net::api::fetch_posts(category_filter(&category)).await }
    });

    // Post whose comment thread is open, if any.
    let open_post = RwSignal::new(None::<i64>);

    let comments = LocalResource::new(move || {
        let post_id = open_post.get();
        async move {
            match post_id {
                Some(id) => crate::net::api::fetch_comments(id).await,
                None => Ok(CommentList::default()),
            }
        }
    });

    let title = RwSignal::new(String::new());
    let content = RwSignal::new(String::new());
    let post_category = RwSignal::new("general".to_owned());
    let error = RwSignal::new(None::<String>);

    let on_publish = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(id) = user_id.get_untracked() else {
            return;
        };
        let post = NewPost {
            title: title.get_untracked().trim().to_owned(),
            content: content.get_untracked().trim().to_owned(),
            category: post_category.get_untracked(),
            user_id: id,
        };
        if post.title.is_empty() || post.content.is_empty() {
            error.set(Some("Title and content are required".to_owned()));
            return;
        }
        error.set(None);
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match crate::net::api::create_post(&post).await {
                Ok(()) => {
                    title.set(String::new());
                    content.set(String::new());
                    posts.refetch();
                }
                Err(err) => error.set(Some(err.to_string())),
            }
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = post;
        }
    };

    let toggle_thread = Callback::new(move |post_id: i64| {
        if open_post.get_untracked() == Some(post_id) {
            open_post.set(None);
        } else {
            open_post.set(Some(post_id));
        }
    });

    let comment_sent = Callback::new(move |()| comments.refetch());

    view! {
        <div class="page community-page">
            <header class="page__header">
                <h1>"Community"</h1>
                <p class="page__subtitle">"Share experiences and support each other."</p>
            </header>

            {move || error.get().map(|msg| view! { <p class="error-banner">{msg}</p> })}

            <form class="card form" on:submit=on_publish>
                <h2>"New post"</h2>
                <label class="form__field">
                    "Title"
                    <input
                        type="text"
                        prop:value=title
                        on:input=move |ev| title.set(event_target_value(&ev))
                    />
                </label>
                <label class="form__field">
                    "Category"
                    <select on:change=move |ev| post_category.set(event_target_value(&ev))>
                        {CATEGORIES
                            .into_iter()
                            .map(|c| view! { <option value=c selected=c == "general">{c}</option> })
                            .collect_view()}
                    </select>
                </label>
                <label class="form__field">
                    "Content"
                    <textarea
                        prop:value=content
                        on:input=move |ev| content.set(event_target_value(&ev))
                    ></textarea>
                </label>
                <button type="submit" class="button">
                    "Publish"
                </button>
            </form>

            <div class="community__filter">
                <label>
                    "Show"
                    <select on:change=move |ev| {
                        selected_category.set(event_target_value(&ev));
                        open_post.set(None);
                    }>
                        <option value="all" selected>"All categories"</option>
                        {CATEGORIES
                            .into_iter()
                            .map(|c| view! { <option value=c>{c}</option> })
                            .collect_view()}
                    </select>
                </label>
            </div>

            <Suspense fallback=move || view! { <p class="loading">"Loading posts..."</p> }>
                {move || {
                    posts
                        .get()
                        .map(|result| match result {
                            Ok(list) if list.posts.is_empty() => {
                                view! { <p class="empty">"No posts in this category yet."</p> }
                                    .into_any()
                            }
                            Ok(list) => {
                                view! {
                                    <ul class="post-list">
                                        {list
                                            .posts
                                            .into_iter()
                                            .map(|post| {
                                                view! {
                                                    <PostCard
                                                        post=post
                                                        open_post=open_post
                                                        comments=comments
                                                        on_toggle=toggle_thread
                                                        on_comment_sent=comment_sent
                                                        user_id=user_id
                                                    />
                                                }
                                            })
                                            .collect_view()}
                                    </ul>
                                }
                                    .into_any()
                            }
                            Err(err) => {
                                view! { <p class="error-banner">{err.to_string()}</p> }.into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}

#[component]
fn PostCard(
    post: Post,
    open_post: RwSignal<Option<i64>>,
    comments: LocalResource<Result<CommentList, ApiError>>,
    on_toggle: Callback<i64>,
    on_comment_sent: Callback<()>,
    user_id: Signal<Option<i64>>,
) -> impl IntoView {
    let post_id = post.id;
    let is_open = move || open_post.get() == Some(post_id);

    let draft = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);

    let on_comment = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(id) = user_id.get_untracked() else {
            return;
        };
        let comment = NewComment {
            user_id: id,
            content: draft.get_untracked().trim().to_owned(),
        };
        if comment.content.is_empty() {
            return;
        }
        error.set(None);
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match crate::net::api::add_comment(post_id, &comment).await {
                Ok(()) => {
                    draft.set(String::new());
                    on_comment_sent.run(());
                }
                Err(err) => error.set(Some(err.to_string())),
            }
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = comment;
        }
    };

    view! {
        <li class="post-list__item card">
            <div class="post__meta">
                <span class="badge">{post.category}</span>
                <span class="post__time">{post.created_at}</span>
            </div>
            <h3 class="post__title">{post.title}</h3>
            <p class="post__content">{post.content}</p>
            <button type="button" class="button button--ghost" on:click=move |_| on_toggle.run(post_id)>
                {move || if is_open() { "Hide comments" } else { "Comments" }}
            </button>

            <Show when=is_open>
                {move || error.get().map(|msg| view! { <p class="error-banner">{msg}</p> })}
                <Suspense fallback=move || view! { <p class="loading">"Loading comments..."</p> }>
                    {move || {
                        comments
                            .get()
                            .map(|result| match result {
                                Ok(list) if list.comments.is_empty() => {
                                    view! { <p class="empty">"No comments yet."</p> }.into_any()
                                }
                                Ok(list) => {
                                    view! {
                                        <ul class="comment-list">
                                            {list
                                                .comments
                                                .into_iter()
                                                .map(|c| {
                                                    view! {
                                                        <li class="comment-list__item">
                                                            <p>{c.content}</p>
                                                            <span class="comment-list__time">{c.created_at}</span>
                                                        </li>
                                                    }
                                                })
                                                .collect_view()}
                                        </ul>
                                    }
                                        .into_any()
                                }
                                Err(err) => {
                                    view! { <p class="error-banner">{err.to_string()}</p> }
                                        .into_any()
                                }
                            })
                    }}
                </Suspense>
                <form class="form form--inline" on:submit=on_comment>
                    <input
                        type="text"
                        placeholder="Add a comment"
                        prop:value=draft
                        on:input=move |ev| draft.set(event_target_value(&ev))
                    />
                    <button type="submit" class="button">
                        "Send"
                    </button>
                </form>
            </Show>
        </li>
    }
}
