use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{HtmlVideoElement, MouseEvent};
use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Playback {
    Playing,
    Paused,
}

impl Playback {
    pub fn from_paused(paused: bool) -> Self {
        if paused {
            Playback::Paused
        } else {
            Playback::Playing
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Playback::Playing => Playback::Paused,
            Playback::Paused => Playback::Playing,
        }
    }

    /// The play button overlays the video only while it is not playing.
    pub fn button_style(self) -> &'static str {
        match self {
            Playback::Playing => "opacity: 0; visibility: hidden;",
            Playback::Paused => "opacity: 1; visibility: visible;",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct TestimonialVideoProps {
    pub src: AttrValue,
    pub poster: AttrValue,
    pub caption: AttrValue,
}

#[function_component(TestimonialVideo)]
pub fn testimonial_video(props: &TestimonialVideoProps) -> Html {
    let video_ref = use_node_ref();
    let playback = use_state_eq(|| Playback::Paused);

    let onclick = {
        let video_ref = video_ref.clone();
        let playback = playback.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(video) = video_ref.cast::<HtmlVideoElement>() else {
                return;
            };
            let current = Playback::from_paused(video.paused());
            match current {
                Playback::Paused => match video.play() {
                    Ok(promise) => spawn_local(async move {
                        if let Err(e) = JsFuture::from(promise).await {
                            gloo_console::error!("video playback was rejected", e);
                        }
                    }),
                    Err(e) => gloo_console::error!("video playback failed", e),
                },
                Playback::Playing => {
                    let _ = video.pause();
                }
            }
            playback.set(current.toggled());
        })
    };

    let onplay = {
        let playback = playback.clone();
        Callback::from(move |_: Event| playback.set(Playback::Playing))
    };

    let onended = {
        let playback = playback.clone();
        Callback::from(move |_: Event| playback.set(Playback::Paused))
    };

    html! {
        <div class="testimonial-video">
            <video
                ref={video_ref}
                src={props.src.clone()}
                poster={props.poster.clone()}
                preload="metadata"
                playsinline=true
                {onplay}
                {onended}
            />
            <button class="play-video" style={playback.button_style()} {onclick}>{"▶"}</button>
            <p class="testimonial-caption">{props.caption.clone()}</p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::Playback;

    #[test]
    fn button_hidden_only_while_playing() {
        assert_eq!(Playback::Playing.button_style(), "opacity: 0; visibility: hidden;");
        assert_eq!(Playback::Paused.button_style(), "opacity: 1; visibility: visible;");
    }

    #[test]
    fn click_toggles_from_the_real_paused_flag() {
        assert_eq!(Playback::from_paused(true).toggled(), Playback::Playing);
        assert_eq!(Playback::from_paused(false).toggled(), Playback::Paused);
    }
}
