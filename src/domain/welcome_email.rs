/// The welcome message every new subscriber receives. Both parts are fixed.
pub struct WelcomeEmail;

impl WelcomeEmail {
    pub const SUBJECT: &'static str = "Welcome to SkyScout South! 🎉";

    pub const HTML_BODY: &'static str = r#"
        <div style="font-family: sans-serif; max-width: 600px; margin: 0 auto;">
          <h1 style="color: #2563eb;">Welcome to SkyScout South!</h1>
          <p>Thanks for signing up for flight deal alerts from your local airports.</p>
          <p>You'll start receiving weekly emails with the best deals from:</p>
          <ul>
            <li>ATL - Atlanta</li>
            <li>BNA - Nashville</li>
            <li>CHA - Chattanooga</li>
            <li>HSV - Huntsville</li>
            <li>BHM - Birmingham</li>
            <li>TYS - Knoxville</li>
          </ul>
          <p>Get ready to save hundreds on your next trip!</p>
          <p style="color: #6b7280; font-size: 14px;">SkyScout South Team</p>
        </div>
      "#;
}
