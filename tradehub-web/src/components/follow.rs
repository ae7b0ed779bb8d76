use log::warn;
use tradehub::controllers::follow::{FollowButton, FollowLabel};
use web_sys::HtmlElement;

pub struct DomFollowButton(pub HtmlElement);

impl FollowButton for DomFollowButton {
    fn username(&self) -> Option<String> {
        self.0.dataset().get("username")
    }

    fn show_following(&self, following: bool) {
        let label = FollowLabel::for_state(following);
        self.0.set_text_content(Some(label.text));
        let classes = self.0.class_list();
        if let Err(err) = classes
            .remove_1(label.remove_class)
            .and_then(|_| classes.add_1(label.add_class))
        {
            warn!("Cannot restyle follow button {err:?}");
        }
    }
}
