use gloo_timers::callback::Timeout;
use log::{info, warn};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, MouseEvent, SubmitEvent};
use yew::prelude::*;

use crate::config;
use crate::reservation::state::{FormAction, FormState, Phase};
use crate::reservation::submit::{submit_reservation, FetchTransport, RETRY_MESSAGE};
use crate::reservation::Field;

struct InputSpec {
    field: Field,
    label: &'static str,
    input_type: &'static str,
    placeholder: &'static str,
}

const INPUTS: [InputSpec; 4] = [
    InputSpec {
        field: Field::Name,
        label: "닉네임 *",
        input_type: "text",
        placeholder: "홍길동",
    },
    InputSpec {
        field: Field::Phone,
        label: "휴대폰 번호 *",
        input_type: "tel",
        placeholder: "010-1234-5678",
    },
    InputSpec {
        field: Field::Email,
        label: "이메일 *",
        input_type: "email",
        placeholder: "example@email.com",
    },
    InputSpec {
        field: Field::Idea,
        label: "변환하고 싶은 유튜브 링크 *",
        input_type: "text",
        placeholder: "https://youtube.com/watch?v=...",
    },
];

#[derive(Properties, PartialEq)]
pub struct ReservationDialogProps {
    pub state: FormState,
    pub dispatch: Callback<FormAction>,
}

#[function_component(ReservationDialog)]
pub fn reservation_dialog(props: &ReservationDialogProps) -> Html {
    let state = &props.state;

    // Fire the request whenever a new attempt enters the submitting phase
    {
        let dispatch = props.dispatch.clone();
        let values = state.values.clone();
        use_effect_with_deps(
            move |(phase, attempt)| {
                if *phase == Phase::Submitting {
                    info!("Sending reservation, attempt {}", attempt);
                    spawn_local(async move {
                        match submit_reservation(&FetchTransport, config::webhook_url(), &values).await {
                            Ok(()) => {
                                info!("Reservation accepted");
                                dispatch.emit(FormAction::Succeeded);
                            }
                            Err(e) => {
                                warn!("Reservation failed: {}", e);
                                dispatch.emit(FormAction::Failed(e));
                            }
                        }
                    });
                }
                || ()
            },
            (state.phase, state.attempt),
        );
    }

    // Hold the success view, then close
    {
        let dispatch = props.dispatch.clone();
        use_effect_with_deps(
            move |phase| {
                let timeout = (*phase == Phase::Success).then(|| {
                    Timeout::new(config::SUCCESS_DISMISS_DELAY_MS, move || {
                        dispatch.emit(FormAction::FinishSuccess);
                    })
                });
                move || drop(timeout)
            },
            state.phase,
        );
    }

    if !state.open {
        return html! {};
    }

    let busy = state.is_busy();

    let close = {
        let dispatch = props.dispatch.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            if !busy {
                gloo_console::log!("Closing reservation dialog");
                dispatch.emit(FormAction::Close);
            }
        })
    };

    let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());

    let onsubmit = {
        let dispatch = props.dispatch.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            dispatch.emit(FormAction::Submit);
        })
    };

    let dismiss_error = {
        let dispatch = props.dispatch.clone();
        Callback::from(move |_: MouseEvent| dispatch.emit(FormAction::DismissError))
    };

    let body = if state.phase == Phase::Success {
        html! {
            <div class="reservation-success">
                <div class="success-emoji">{"🎉"}</div>
                <h3>{"예약 성공!"}</h3>
                <p>{"런칭 알림을 기다려주세요."}</p>
            </div>
        }
    } else {
        html! {
            <>
                <h3 class="dialog-title">{"사전 예약하기"}</h3>
                if state.submit_error.is_some() {
                    <div class="submit-error" role="alert">
                        <span>{RETRY_MESSAGE}</span>
                        <button type="button" class="submit-error-dismiss" onclick={dismiss_error}>
                            {"✕"}
                        </button>
                    </div>
                }
                <form class="reservation-form" onsubmit={onsubmit} novalidate=true>
                    { for INPUTS.iter().map(|spec| render_input(spec, state, &props.dispatch)) }
                    <button type="submit" class="submit-button" disabled={busy}>
                        if busy {
                            <span class="loading-spinner"></span>
                            {"AI가 그림 그릴 준비 중..."}
                        } else {
                            {"사전 예약하기"}
                        }
                    </button>
                    <p class="form-footnote">{"* 모든 항목은 필수 입력 항목입니다"}</p>
                </form>
            </>
        }
    };

    html! {
        <div class="dialog-backdrop" onclick={close.clone()}>
            <div class="dialog-card" onclick={keep_open}>
                <button type="button" class="dialog-close" onclick={close} disabled={busy}>
                    {"✕"}
                </button>
                {body}
            </div>
        </div>
    }
}

fn render_input(spec: &InputSpec, state: &FormState, dispatch: &Callback<FormAction>) -> Html {
    let field = spec.field;
    let error = state.error_for(field);
    let oninput = {
        let dispatch = dispatch.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            dispatch.emit(FormAction::Edit(field, input.value()));
        })
    };

    html! {
        <div class="form-field">
            <label for={field.key()}>{spec.label}</label>
            <input
                id={field.key()}
                type={spec.input_type}
                value={state.values.get(field).to_string()}
                placeholder={spec.placeholder}
                class={classes!("form-input", error.is_some().then_some("invalid"))}
                disabled={state.is_busy()}
                oninput={oninput}
            />
            if let Some(message) = error {
                <p class="field-error">{message.to_string()}</p>
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reservation::submit::SubmitError;
    use std::rc::Rc;
    use yew::{LocalServerRenderer, Reducible};

    fn render(state: FormState) -> String {
        let props = ReservationDialogProps {
            state,
            dispatch: Callback::noop(),
        };
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        let local = tokio::task::LocalSet::new();
        local.block_on(
            &runtime,
            LocalServerRenderer::<ReservationDialog>::with_props(props)
                .hydratable(false)
                .render(),
        )
    }

    fn state_after(actions: impl IntoIterator<Item = FormAction>) -> FormState {
        let state = actions
            .into_iter()
            .fold(Rc::new(FormState::default()), |state, action| state.reduce(action));
        (*state).clone()
    }

    fn filled() -> Vec<FormAction> {
        vec![
            FormAction::Open,
            FormAction::Edit(Field::Name, "tester".to_string()),
            FormAction::Edit(Field::Phone, "010-1234-5678".to_string()),
            FormAction::Edit(Field::Email, "a@b.co".to_string()),
            FormAction::Edit(Field::Idea, "https://youtu.be/abc".to_string()),
        ]
    }

    /// Opening tags that start with `prefix`, up to their closing `>`.
    fn tags<'a>(html: &'a str, prefix: &str) -> Vec<&'a str> {
        html.match_indices(prefix)
            .filter_map(|(start, _)| html[start..].find('>').map(|end| &html[start..=start + end]))
            .collect()
    }

    #[test]
    fn test_closed_dialog_renders_nothing() {
        let html = render(FormState::default());
        assert!(!html.contains("dialog-backdrop"));
    }

    #[test]
    fn test_idle_form_is_enabled() {
        let html = render(state_after(filled()));
        assert_eq!(tags(&html, "<input").len(), 4);
        assert!(!html.contains("disabled"));
        assert!(html.contains("사전 예약하기"));
    }

    #[test]
    fn test_submitting_form_disables_every_control() {
        let mut actions = filled();
        actions.push(FormAction::Submit);
        let html = render(state_after(actions));

        let inputs = tags(&html, "<input");
        assert_eq!(inputs.len(), 4);
        assert!(inputs.iter().all(|tag| tag.contains("disabled")), "{inputs:?}");

        let buttons = tags(&html, "<button");
        let submit = buttons
            .iter()
            .find(|tag| tag.contains("type=\"submit\""))
            .expect("submit button rendered");
        assert!(submit.contains("disabled"));
        assert!(buttons.iter().all(|tag| tag.contains("disabled")));
        assert!(html.contains("AI가 그림 그릴 준비 중..."));
    }

    #[test]
    fn test_failed_submission_shows_retry_banner_and_keeps_values() {
        let mut actions = filled();
        actions.push(FormAction::Submit);
        actions.push(FormAction::Failed(SubmitError::Status(500)));
        let html = render(state_after(actions));

        assert!(html.contains(RETRY_MESSAGE));
        assert!(html.contains("role=\"alert\""));
        assert!(html.contains("value=\"a@b.co\""));
        assert!(!html.contains("disabled"));
    }

    #[test]
    fn test_field_errors_render_inline() {
        let html = render(state_after([FormAction::Open, FormAction::Submit]));
        assert!(html.contains("닉네임을 입력해주세요"));
        assert!(html.contains("변환하고 싶은 유튜브 링크를 입력해주세요"));
        assert_eq!(tags(&html, "<p class=\"field-error\"").len(), 4);
        assert!(!html.contains(RETRY_MESSAGE));
    }

    #[test]
    fn test_success_view_replaces_form() {
        let mut actions = filled();
        actions.push(FormAction::Submit);
        actions.push(FormAction::Succeeded);
        let html = render(state_after(actions));

        assert!(html.contains("예약 성공!"));
        assert!(!html.contains("<form"));
    }
}
