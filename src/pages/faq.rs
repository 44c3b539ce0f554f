use web_sys::MouseEvent;
use yew::prelude::*;

pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQ_ENTRIES: [FaqEntry; 5] = [
    FaqEntry {
        question: "무료인가요?",
        answer: "정식 출시 후 기본 무료 플랜과 프리미엄 플랜을 제공할 예정이에요. 사전 예약자에게는 출시 초기 특별 혜택을 드립니다!",
    },
    FaqEntry {
        question: "어떤 영상이든 가능한가요?",
        answer: "대부분의 유튜브 영상에서 작동해요. 강의, 리뷰, 브이로그, 다큐멘터리 등 다양한 콘텐츠를 지원합니다.",
    },
    FaqEntry {
        question: "생성 시간은 얼마나 걸리나요?",
        answer: "영상 길이에 따라 다르지만, 보통 2-5분 정도면 애니메이션이 완성돼요.",
    },
    FaqEntry {
        question: "저작권 문제는 없나요?",
        answer: "AI가 원본 콘텐츠를 새롭게 재구성하여 창작하기 때문에 안심하고 사용하실 수 있습니다.",
    },
    FaqEntry {
        question: "언제 출시되나요?",
        answer: "2025년 상반기 출시 예정입니다. 사전 예약하시면 가장 먼저 소식을 받아보실 수 있어요!",
    },
];

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: AttrValue,
    answer: AttrValue,
    index: usize,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let is_open = use_state(|| false);

    let toggle = {
        let is_open = is_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            is_open.set(!*is_open);
        })
    };

    // staggered entrance, 100ms apart
    let delay = format!("transition-delay: {}ms;", props.index * 100);

    html! {
        <div class={classes!("faq-item", "reveal", if *is_open { "open" } else { "" })} style={delay}>
            <button class="faq-question" onclick={toggle}>
                <span class="question-text">{&props.question}</span>
                <span class="toggle-icon">{"⌄"}</span>
            </button>
            <div class="faq-answer">
                <p>{&props.answer}</p>
            </div>
        </div>
    }
}

#[function_component(Faq)]
pub fn faq() -> Html {
    html! {
        <section class="section faq-section">
            <div class="section-inner narrow">
                <h2 class="section-title reveal">{"자주 묻는 질문"}</h2>
                <div class="faq-list">
                    {
                        for FAQ_ENTRIES.iter().enumerate().map(|(index, entry)| html! {
                            <FaqItem
                                question={entry.question}
                                answer={entry.answer}
                                index={index}
                            />
                        })
                    }
                </div>
            </div>
        </section>
    }
}
