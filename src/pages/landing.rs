use chrono::Datelike;
use log::info;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::reservation_dialog::ReservationDialog;
use crate::components::reveal::use_scroll_reveal;
use crate::pages::faq::Faq;
use crate::reservation::state::{FormAction, FormState};

const DEMO_CELLS: usize = 12;
const GALLERY_CARDS: usize = 8;

struct Feature {
    icon: &'static str,
    title: &'static str,
    body: &'static str,
}

const FEATURES: [Feature; 3] = [
    Feature {
        icon: "⚡",
        title: "URL만 넣으면 끝",
        body: "유튜브 링크만 복사해서 붙여넣으면 AI가 알아서 처리해요.",
    },
    Feature {
        icon: "✨",
        title: "밈 스타일 자동 적용",
        body: "지루한 내용도 재미있는 밈과 애니메이션으로 변신해요.",
    },
    Feature {
        icon: "🔗",
        title: "1분 숏폼 자동 변환",
        body: "인스타, 틱톡, 유튜브 쇼츠에 바로 올릴 수 있어요.",
    },
];

const BEFORE_POINTS: [&str; 3] = ["30분 ~ 1시간 소요", "집중력 떨어짐", "중요한 부분 놓치기 쉬움"];
const AFTER_POINTS: [&str; 3] = ["30초 ~ 1분으로 압축", "밈 스타일로 재미있게", "핵심 내용만 쏙쏙"];

#[function_component(Hero)]
fn hero() -> Html {
    html! {
        <section class="hero">
            <div class="hero-glows">
                <div class="glow glow-left"></div>
                <div class="glow glow-right"></div>
            </div>
            <div class="hero-content">
                <div class="hero-badge fade-up">{"✨ 곧 출시"}</div>
                <h1 class="hero-title fade-up delay-1">
                    {"30분 영상,"}
                    <br />
                    <span class="gradient-text">{"30초 툰"}</span>
                    {"으로 끝내기"}
                </h1>
                <p class="hero-subtitle fade-up delay-2">
                    {"지루한 긴 영상은 이제 그만. AI가 핵심만 뽑아 밈 스타일 애니메이션으로 만들어드려요."}
                </p>
                <div class="demo-frame zoom-in delay-3">
                    <div class="demo-grid">
                        {
                            for (0..DEMO_CELLS).map(|i| html! {
                                <div class="demo-cell" style={format!("animation-delay: {:.1}s;", i as f64 * 0.1)}></div>
                            })
                        }
                    </div>
                    <div class="demo-play">
                        <div class="play-pulse"></div>
                        <div class="play-button">{"▶"}</div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[function_component(Comparison)]
fn comparison() -> Html {
    html! {
        <section class="section">
            <div class="section-inner">
                <h2 class="section-title reveal">
                    {"지루함 "}<span class="muted">{"vs"}</span>{" "}<span class="accent">{"재미"}</span>
                </h2>
                <div class="comparison-grid">
                    <div class="compare-card before reveal from-left">
                        <div class="compare-emoji">{"😴"}</div>
                        <h3>{"원본 영상"}</h3>
                        <ul>
                            { for BEFORE_POINTS.iter().map(|point| html! { <li class="dot">{*point}</li> }) }
                        </ul>
                    </div>
                    <div class="compare-card after reveal from-right">
                        <div class="compare-emoji">{"🔥"}</div>
                        <h3>{"생성된 애니메이션"}</h3>
                        <ul>
                            { for AFTER_POINTS.iter().map(|point| html! { <li class="sparkle">{*point}</li> }) }
                        </ul>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[function_component(Features)]
fn features() -> Html {
    html! {
        <section class="section">
            <div class="section-inner">
                <h2 class="section-title reveal">
                    {"이렇게 "}<span class="gradient-text">{"간단합니다"}</span>
                </h2>
                <div class="feature-grid">
                    {
                        for FEATURES.iter().enumerate().map(|(i, feature)| html! {
                            <div class="feature-card reveal" style={format!("transition-delay: {}ms;", (i + 1) * 100)}>
                                <div class="feature-icon">{feature.icon}</div>
                                <h3>{feature.title}</h3>
                                <p>{feature.body}</p>
                            </div>
                        })
                    }
                </div>
            </div>
        </section>
    }
}

#[function_component(Gallery)]
fn gallery() -> Html {
    html! {
        <section class="section">
            <div class="section-inner">
                <h2 class="section-title reveal">
                    <span class="accent">{"지금 핫한"}</span>{" 영상의"}
                    <br />
                    {"애니메이션 요약"}
                </h2>
                <div class="gallery-grid">
                    {
                        for (0..GALLERY_CARDS).map(|i| html! {
                            <div class="gallery-card reveal zoom" style={format!("transition-delay: {}ms;", i * 50)}>
                                <div class="gallery-icon">{"🎬"}</div>
                                <div class="gallery-caption">
                                    <div class="caption-line long"></div>
                                    <div class="caption-line short"></div>
                                </div>
                            </div>
                        })
                    }
                </div>
            </div>
        </section>
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let form = use_reducer(FormState::default);
    use_scroll_reveal();

    // Scroll to top only on initial mount
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    let dispatch = {
        let form = form.clone();
        Callback::from(move |action: FormAction| form.dispatch(action))
    };

    let open_form = {
        let dispatch = dispatch.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            info!("Opening reservation dialog");
            dispatch.emit(FormAction::Open);
        })
    };

    let year = chrono::Local::now().year();

    html! {
        <div class="landing-page">
            <Hero />
            <Comparison />
            <Features />
            <Gallery />
            <Faq />

            <div class="floating-cta fade-up delay-cta">
                <button class="cta-button" onclick={open_form}>
                    <span class="cta-label">{"사전 예약하기"}<span class="cta-arrow">{"→"}</span></span>
                    <span class="cta-shine"></span>
                </button>
            </div>

            <ReservationDialog state={(*form).clone()} dispatch={dispatch} />

            <footer class="site-footer">
                <p>{format!("© {} AI 미니 애니메이션 요약 서비스. All rights reserved.", year)}</p>
            </footer>
        </div>
    }
}
